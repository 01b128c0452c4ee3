use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::lecture::LectureRepository,
    error::AppError,
    generation::GenerationClient,
    model::lecture::{CreateLectureParams, Lecture, UploadLectureParams},
};

pub struct LectureService<'a> {
    db: &'a DatabaseConnection,
    generator: &'a dyn GenerationClient,
}

impl<'a> LectureService<'a> {
    pub fn new(db: &'a DatabaseConnection, generator: &'a dyn GenerationClient) -> Self {
        Self { db, generator }
    }

    /// Summarizes an uploaded document and stores it as a new lecture.
    ///
    /// The stored content and summary are exactly what the generation service returned.
    /// If the insert fails after a successful summarize call the generated summary is
    /// discarded.
    ///
    /// # Arguments
    /// - `params` - Validated upload (subject, title, filename and file bytes)
    ///
    /// # Returns
    /// - `Ok(Lecture)` - Newly stored lecture with its generated id
    /// - `Err(AppError::UpstreamErr)` - Generation service failed
    /// - `Err(AppError::DbErr)` - Storing the lecture failed
    pub async fn upload(&self, params: UploadLectureParams) -> Result<Lecture, AppError> {
        let file_size = params.file.len();
        let generated = self
            .generator
            .summarize(&params.file_name, params.file)
            .await?;

        let repo = LectureRepository::new(self.db);
        let lecture = repo
            .create(CreateLectureParams {
                subject_id: params.subject_id,
                title: params.title,
                content: generated.text,
                summary: generated.summary,
                uploaded_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            lecture_id = lecture.id,
            subject_id = lecture.subject_id,
            file_size,
            "Stored uploaded lecture"
        );

        Ok(lecture)
    }

    /// Gets a lecture by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Lecture>, AppError> {
        let repo = LectureRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}

/// Loads the text of a lecture for a generation request.
///
/// # Returns
/// - `Ok(String)` - Non-blank lecture text
/// - `Err(AppError::NotFound)` - No lecture with this id
/// - `Err(AppError::BadRequest)` - The lecture has no text to generate from
/// - `Err(AppError::DbErr)` - Database error
pub async fn source_text(db: &DatabaseConnection, lecture_id: i64) -> Result<String, AppError> {
    let content = LectureRepository::new(db)
        .get_content(lecture_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Lecture not found".to_string()))?;

    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Lecture has no content to generate from".to_string(),
        ));
    }

    Ok(content)
}
