//! Lecture factory for creating test lecture entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lectures with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lecture::LectureFactory;
///
/// let lecture = LectureFactory::new(&db)
///     .content("")
///     .build()
///     .await?;
/// ```
pub struct LectureFactory<'a> {
    db: &'a DatabaseConnection,
    subject_id: i64,
    title: String,
    content: String,
    summary: String,
    uploaded_at: DateTime<Utc>,
}

impl<'a> LectureFactory<'a> {
    /// Creates a new LectureFactory with default values.
    ///
    /// Defaults:
    /// - subject_id: `1`
    /// - title: `"Lecture {id}"` where id is auto-incremented
    /// - content: a short paragraph of lecture text
    /// - summary: `"Test summary"`
    /// - uploaded_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            subject_id: 1,
            title: format!("Lecture {}", id),
            content: format!(
                "Lecture {} covers relational databases, keys and normalization.",
                id
            ),
            summary: "Test summary".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    /// Sets the subject the lecture belongs to.
    pub fn subject_id(mut self, subject_id: i64) -> Self {
        self.subject_id = subject_id;
        self
    }

    /// Sets the lecture title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the full lecture text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the stored summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builds and inserts the lecture entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::lecture::Model)` - Created lecture entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            id: ActiveValue::NotSet,
            subject_id: ActiveValue::Set(self.subject_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            summary: ActiveValue::Set(self.summary),
            uploaded_at: ActiveValue::Set(self.uploaded_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecture with default values.
pub async fn create_lecture(db: &DatabaseConnection) -> Result<entity::lecture::Model, DbErr> {
    LectureFactory::new(db).build().await
}
