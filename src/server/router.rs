use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{flashcard, health, lecture, quiz},
    state::AppState,
};

/// Room left for multipart boundaries and text fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(info(
    title = "Lecture Gateway API",
    description = "Lecture upload, summarization, quiz and flashcard generation"
))]
struct ApiDoc;

/// Builds the API router and its OpenAPI documentation.
///
/// # Arguments
/// - `max_upload_bytes` - Largest lecture document accepted by the upload endpoint
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(lecture::upload_lecture))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(upload)
        .routes(routes!(quiz::generate_quiz))
        .routes(routes!(flashcard::generate_flashcards))
        .routes(routes!(lecture::get_lecture))
        .routes(routes!(quiz::get_lecture_quiz))
        .routes(routes!(health::health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
