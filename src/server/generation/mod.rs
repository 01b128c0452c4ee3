//! Client for the external generation service.
//!
//! The service derives a summary, quiz questions, or flashcards from lecture text. Handlers
//! depend on the `GenerationClient` trait so the HTTP implementation can be swapped for an
//! in-process fake in tests.

pub mod http;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use bytes::Bytes;

use crate::server::{
    error::upstream::UpstreamError,
    model::{flashcard::Flashcard, lecture::GeneratedSummary, quiz::GeneratedQuestion},
};

pub use http::HttpGenerationClient;

#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Extracts the text of a document and summarizes it.
    ///
    /// # Arguments
    /// - `file_name` - Original filename, forwarded so the service can detect the format
    /// - `file` - Raw document bytes
    async fn summarize(&self, file_name: &str, file: Bytes)
        -> Result<GeneratedSummary, UpstreamError>;

    /// Generates quiz questions from lecture text, in presentation order.
    async fn generate_quiz(&self, text: &str) -> Result<Vec<GeneratedQuestion>, UpstreamError>;

    /// Generates question/answer flashcards from lecture text.
    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, UpstreamError>;
}
