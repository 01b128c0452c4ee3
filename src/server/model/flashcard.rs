//! Flashcard domain model.
//!
//! Flashcards are generated on demand and handed back to the caller; they are not
//! written to storage.

use serde::Deserialize;

use crate::{
    model::flashcard::{FlashcardDto, GeneratedFlashcardsDto},
    server::error::upstream::UpstreamError,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    /// Checks that both sides of the card carry text.
    pub fn validate(&self, index: usize) -> Result<(), UpstreamError> {
        if self.question.trim().is_empty() || self.answer.trim().is_empty() {
            return Err(UpstreamError::Malformed {
                endpoint: "/flashcards",
                reason: format!("flashcard {} is missing a question or answer", index),
            });
        }
        Ok(())
    }

    pub fn into_dto(self) -> FlashcardDto {
        FlashcardDto {
            question: self.question,
            answer: self.answer,
        }
    }
}

pub fn into_generated_flashcards_dto(flashcards: Vec<Flashcard>) -> GeneratedFlashcardsDto {
    GeneratedFlashcardsDto {
        flashcards: flashcards.into_iter().map(Flashcard::into_dto).collect(),
    }
}
