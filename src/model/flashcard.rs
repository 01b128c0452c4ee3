use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlashcardDto {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GeneratedFlashcardsDto {
    pub flashcards: Vec<FlashcardDto>,
}
