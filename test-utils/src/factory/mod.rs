//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let lecture = factory::create_lecture(&db).await?;
//! let questions = factory::create_quiz_questions(&db, lecture.id, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let lecture = factory::lecture::LectureFactory::new(&db)
//!     .subject_id(3)
//!     .title("Lecture 1")
//!     .content("hello world")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod lecture;
pub mod quiz;

pub use lecture::create_lecture;
pub use quiz::{create_quiz_question, create_quiz_questions};
