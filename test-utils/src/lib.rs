//! Lecture Gateway Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the lecture
//! gateway. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for seeding lectures and
//! quiz questions.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_lecture_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_lecture_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let lecture = factory::create_lecture(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
