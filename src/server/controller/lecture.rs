use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_typed_multipart::{FieldData, TryFromMultipart, TypedMultipart, TypedMultipartError};
use bytes::Bytes;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        lecture::{LectureDto, UploadedLectureDto},
    },
    server::{
        error::AppError, model::lecture::UploadLectureParams, service::lecture::LectureService,
        state::AppState,
    },
};

/// Tag for grouping lecture endpoints in OpenAPI documentation
pub static LECTURE_TAG: &str = "lecture";

/// Filename forwarded to the generation service when the upload carries none.
const DEFAULT_FILE_NAME: &str = "lecture";

/// Multipart form of the upload endpoint.
///
/// Fields are optional at the extractor level so a missing field yields a specific
/// 400 message instead of a generic parse failure. The file size is checked against
/// the configured ceiling in [`UploadLectureForm::into_params`].
#[derive(TryFromMultipart)]
pub struct UploadLectureForm {
    pub file: Option<FieldData<Bytes>>,
    pub subject_id: Option<String>,
    #[form_data(default)]
    pub title: String,
}

/// OpenAPI description of [`UploadLectureForm`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadLectureFormSchema {
    /// Lecture document to summarize
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// Subject the lecture belongs to
    subject_id: i64,
    /// Display title (defaults to empty)
    title: Option<String>,
}

impl UploadLectureForm {
    fn into_params(self, max_upload_bytes: usize) -> Result<UploadLectureParams, AppError> {
        let file = self
            .file
            .ok_or_else(|| AppError::BadRequest("Missing file part".to_string()))?;

        if file.contents.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if file.contents.len() > max_upload_bytes {
            return Err(AppError::BadRequest(format!(
                "Uploaded file exceeds the {} byte limit",
                max_upload_bytes
            )));
        }

        let subject_id = self
            .subject_id
            .ok_or_else(|| AppError::BadRequest("Missing subject_id field".to_string()))?;
        let subject_id = subject_id.trim().parse::<i64>().map_err(|_| {
            AppError::BadRequest(format!("Invalid subject_id: {}", subject_id.trim()))
        })?;

        let file_name = file
            .metadata
            .file_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        Ok(UploadLectureParams {
            subject_id,
            title: self.title,
            file_name,
            file: file.contents,
        })
    }
}

/// Upload a lecture document.
///
/// Forwards the document to the generation service for text extraction and
/// summarization, then stores the lecture with the extracted text and summary.
///
/// # Arguments
/// - `state` - Application state containing the database and generation client
/// - `form` - Multipart form with `file`, `subject_id` and optional `title`
///
/// # Returns
/// - `200 OK` - Lecture stored; body carries its id, text and summary
/// - `400 Bad Request` - Malformed form, missing or empty file, invalid subject_id
/// - `500 Internal Server Error` - Generation service or database failure
#[utoipa::path(
    post,
    path = "/api/lecture/upload",
    tag = LECTURE_TAG,
    request_body(content = UploadLectureFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Lecture uploaded and summarized", body = UploadedLectureDto),
        (status = 400, description = "Invalid upload form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_lecture(
    State(state): State<AppState>,
    form: Result<TypedMultipart<UploadLectureForm>, TypedMultipartError>,
) -> Result<impl IntoResponse, AppError> {
    let TypedMultipart(form) = form?;
    let params = form.into_params(state.max_upload_bytes)?;

    let service = LectureService::new(&state.db, state.generator.as_ref());

    let lecture = service.upload(params).await?;

    Ok((StatusCode::OK, Json(lecture.into_uploaded_dto())))
}

/// Get a stored lecture by ID.
///
/// # Returns
/// - `200 OK` - Lecture with its text and summary
/// - `404 Not Found` - Lecture does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lecture/{lecture_id}",
    tag = LECTURE_TAG,
    params(
        ("lecture_id" = i64, Path, description = "Lecture ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lecture", body = LectureDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecture(
    State(state): State<AppState>,
    Path(lecture_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = LectureService::new(&state.db, state.generator.as_ref());

    let lecture = service
        .get_by_id(lecture_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Lecture not found".to_string()))?;

    Ok((StatusCode::OK, Json(lecture.into_dto())))
}
