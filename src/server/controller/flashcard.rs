use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, flashcard::GeneratedFlashcardsDto, lecture::LectureRefDto},
    server::{
        error::AppError, model::flashcard::into_generated_flashcards_dto,
        service::flashcard::FlashcardService, state::AppState,
    },
};

/// Tag for grouping flashcard endpoints in OpenAPI documentation
pub static FLASHCARD_TAG: &str = "flashcard";

/// Generate flashcards for a lecture.
///
/// The generated cards are returned as-is and not stored.
///
/// # Returns
/// - `200 OK` - Flashcards in generation order
/// - `400 Bad Request` - Malformed body or lecture without text
/// - `404 Not Found` - Lecture does not exist
/// - `500 Internal Server Error` - Generation service or database failure
#[utoipa::path(
    post,
    path = "/api/lecture/flashcards",
    tag = FLASHCARD_TAG,
    request_body = LectureRefDto,
    responses(
        (status = 200, description = "Flashcards generated", body = GeneratedFlashcardsDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_flashcards(
    State(state): State<AppState>,
    payload: Result<Json<LectureRefDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = FlashcardService::new(&state.db, state.generator.as_ref());

    let flashcards = service.generate(payload.lecture_id).await?;

    Ok((
        StatusCode::OK,
        Json(into_generated_flashcards_dto(flashcards)),
    ))
}
