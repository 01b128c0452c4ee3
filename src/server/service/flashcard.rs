use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError, generation::GenerationClient, model::flashcard::Flashcard,
    service::lecture::source_text,
};

pub struct FlashcardService<'a> {
    db: &'a DatabaseConnection,
    generator: &'a dyn GenerationClient,
}

impl<'a> FlashcardService<'a> {
    pub fn new(db: &'a DatabaseConnection, generator: &'a dyn GenerationClient) -> Self {
        Self { db, generator }
    }

    /// Generates flashcards for a lecture.
    ///
    /// The cards are returned to the caller as generated and are not stored.
    ///
    /// # Returns
    /// - `Ok(Vec<Flashcard>)` - Generated cards in generation order
    /// - `Err(AppError::NotFound)` - Lecture does not exist (no outbound call made)
    /// - `Err(AppError::BadRequest)` - Lecture has no text (no outbound call made)
    /// - `Err(AppError::UpstreamErr)` - Generation failed or returned a malformed card
    pub async fn generate(&self, lecture_id: i64) -> Result<Vec<Flashcard>, AppError> {
        let text = source_text(self.db, lecture_id).await?;

        let flashcards = self.generator.generate_flashcards(&text).await?;
        for (index, card) in flashcards.iter().enumerate() {
            card.validate(index)?;
        }

        tracing::info!(
            lecture_id,
            flashcard_count = flashcards.len(),
            "Generated flashcards"
        );

        Ok(flashcards)
    }
}
