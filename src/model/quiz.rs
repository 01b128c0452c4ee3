use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizQuestionDto {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GeneratedQuizDto {
    pub status: String,
    pub questions: Vec<QuizQuestionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StoredQuizQuestionDto {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LectureQuizDto {
    pub lecture_id: i64,
    pub questions: Vec<StoredQuizQuestionDto>,
}
