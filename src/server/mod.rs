//! Lecture ingestion gateway backend.
//!
//! Accepts lecture documents, forwards them to the external generation service for
//! text extraction and summarization, and stores the results. Quizzes generated from a
//! stored lecture are persisted; flashcards are generated on demand and returned only.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, request validation, and DTO conversion
//! - **Service Layer** (`service/`) - Flow orchestration between controllers, generation client and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types and generated-record validation
//! - **Generation** (`generation/`) - Client for the external summary/quiz/flashcard service
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, generation client)
//! - **Startup** (`startup`) - Database connection, migrations and HTTP client setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates the request, converts DTOs to params, calls service
//! 3. **Service** loads lecture text, calls the generation client, validates the result
//! 4. **Data** writes or reads rows, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod generation;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
