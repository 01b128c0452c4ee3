use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        lecture::LectureRefDto,
        quiz::{GeneratedQuizDto, LectureQuizDto},
    },
    server::{
        error::AppError,
        model::quiz::{into_generated_quiz_dto, into_lecture_quiz_dto},
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// Generate and store a quiz for a lecture.
///
/// Sends the lecture text to the generation service and stores every returned
/// question as one batch. Each call stores a new batch; earlier quizzes are kept.
///
/// # Arguments
/// - `state` - Application state containing the database and generation client
/// - `payload` - JSON body `{ "lecture_id": <int> }`
///
/// # Returns
/// - `200 OK` - Questions as generated, in generation order
/// - `400 Bad Request` - Malformed body or lecture without text
/// - `404 Not Found` - Lecture does not exist
/// - `500 Internal Server Error` - Generation service or database failure
#[utoipa::path(
    post,
    path = "/api/lecture/quiz",
    tag = QUIZ_TAG,
    request_body = LectureRefDto,
    responses(
        (status = 200, description = "Quiz generated and stored", body = GeneratedQuizDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<LectureRefDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = QuizService::new(&state.db, state.generator.as_ref());

    let questions = service.generate(payload.lecture_id).await?;

    Ok((StatusCode::OK, Json(into_generated_quiz_dto(questions))))
}

/// Get every stored quiz question of a lecture.
///
/// # Returns
/// - `200 OK` - Stored questions, oldest first
/// - `404 Not Found` - Lecture does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lecture/{lecture_id}/quiz",
    tag = QUIZ_TAG,
    params(
        ("lecture_id" = i64, Path, description = "Lecture ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved quiz questions", body = LectureQuizDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecture_quiz(
    State(state): State<AppState>,
    Path(lecture_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuizService::new(&state.db, state.generator.as_ref());

    let questions = service.get_by_lecture_id(lecture_id).await?;

    Ok((
        StatusCode::OK,
        Json(into_lecture_quiz_dto(lecture_id, questions)),
    ))
}
