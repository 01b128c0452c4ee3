use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response to a successful lecture upload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UploadedLectureDto {
    pub lecture_id: i64,
    pub status: String,
    pub text: String,
    pub summary: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LectureDto {
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Request body shared by the quiz and flashcard generation endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LectureRefDto {
    pub lecture_id: i64,
}
