use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::server::{
    error::upstream::UpstreamError,
    generation::GenerationClient,
    model::{flashcard::Flashcard, lecture::GeneratedSummary, quiz::GeneratedQuestion},
};

/// In-process stand-in for the generation service.
///
/// Returns canned results and counts every call so tests can assert that no
/// outbound request was made.
#[derive(Default)]
pub struct FakeGenerationClient {
    summary: Option<GeneratedSummary>,
    questions: Option<Vec<GeneratedQuestion>>,
    flashcards: Option<Vec<Flashcard>>,
    calls: AtomicUsize,
    /// Filename and payload of every summarize call, in order.
    pub uploads: Mutex<Vec<(String, Vec<u8>)>>,
    /// Text of every quiz or flashcard call, in order.
    pub texts: Mutex<Vec<String>>,
}

impl FakeGenerationClient {
    /// A fake whose every operation fails with a 503 from the service.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, text: &str, summary: &str) -> Self {
        self.summary = Some(GeneratedSummary {
            text: text.to_string(),
            summary: summary.to_string(),
        });
        self
    }

    pub fn with_questions(mut self, questions: Vec<GeneratedQuestion>) -> Self {
        self.questions = Some(questions);
        self
    }

    pub fn with_flashcards(mut self, flashcards: Vec<Flashcard>) -> Self {
        self.flashcards = Some(flashcards);
        self
    }

    /// Number of calls made to any operation.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn unavailable(endpoint: &'static str) -> UpstreamError {
        UpstreamError::Status {
            endpoint,
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "fake generation service has no canned response".to_string(),
        }
    }
}

#[async_trait]
impl GenerationClient for FakeGenerationClient {
    async fn summarize(
        &self,
        file_name: &str,
        file: Bytes,
    ) -> Result<GeneratedSummary, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploads
            .lock()
            .unwrap()
            .push((file_name.to_string(), file.to_vec()));

        self.summary
            .clone()
            .ok_or_else(|| Self::unavailable("/summarize"))
    }

    async fn generate_quiz(&self, text: &str) -> Result<Vec<GeneratedQuestion>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());

        self.questions
            .clone()
            .ok_or_else(|| Self::unavailable("/quiz"))
    }

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());

        self.flashcards
            .clone()
            .ok_or_else(|| Self::unavailable("/flashcards"))
    }
}
