//! Lecture domain models and parameters.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::lecture::{LectureDto, UploadedLectureDto};

/// Status marker returned for a completed upload.
pub const UPLOADED_STATUS: &str = "uploaded";

/// A stored lecture.
#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Lecture {
    /// Converts an entity model to a lecture at the repository boundary.
    pub fn from_entity(entity: entity::lecture::Model) -> Self {
        Self {
            id: entity.id,
            subject_id: entity.subject_id,
            title: entity.title,
            content: entity.content,
            summary: entity.summary,
            uploaded_at: entity.uploaded_at,
        }
    }

    pub fn into_dto(self) -> LectureDto {
        LectureDto {
            id: self.id,
            subject_id: self.subject_id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            uploaded_at: self.uploaded_at,
        }
    }

    /// Converts a freshly created lecture into the upload response.
    pub fn into_uploaded_dto(self) -> UploadedLectureDto {
        UploadedLectureDto {
            lecture_id: self.id,
            status: UPLOADED_STATUS.to_string(),
            text: self.content,
            summary: self.summary,
        }
    }
}

/// A validated lecture upload, ready to be sent for summarization.
#[derive(Debug, Clone)]
pub struct UploadLectureParams {
    pub subject_id: i64,
    pub title: String,
    /// Original filename of the uploaded document.
    pub file_name: String,
    pub file: Bytes,
}

/// Parameters for inserting a lecture row.
#[derive(Debug, Clone)]
pub struct CreateLectureParams {
    pub subject_id: i64,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Text extracted from a document together with its generated summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedSummary {
    pub text: String,
    pub summary: String,
}
