use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lecture::LectureRepository, quiz::QuizRepository},
    error::AppError,
    generation::GenerationClient,
    model::quiz::{GeneratedQuestion, QuizQuestion},
    service::lecture::source_text,
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
    generator: &'a dyn GenerationClient,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection, generator: &'a dyn GenerationClient) -> Self {
        Self { db, generator }
    }

    /// Generates a quiz for a lecture and stores every question.
    ///
    /// The whole batch is validated before anything is written, then stored in one
    /// transaction. Concurrent requests for the same lecture are not serialized; each
    /// stores its own batch.
    ///
    /// # Arguments
    /// - `lecture_id` - Lecture to generate the quiz from
    ///
    /// # Returns
    /// - `Ok(Vec<GeneratedQuestion>)` - Questions as generated, in generation order
    /// - `Err(AppError::NotFound)` - Lecture does not exist (no outbound call made)
    /// - `Err(AppError::BadRequest)` - Lecture has no text (no outbound call made)
    /// - `Err(AppError::UpstreamErr)` - Generation failed or returned a malformed question
    /// - `Err(AppError::DbErr)` - Storing the batch failed; no question was stored
    pub async fn generate(&self, lecture_id: i64) -> Result<Vec<GeneratedQuestion>, AppError> {
        let text = source_text(self.db, lecture_id).await?;

        let questions = self.generator.generate_quiz(&text).await?;
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }

        QuizRepository::new(self.db)
            .create_many(lecture_id, &questions)
            .await?;

        tracing::info!(
            lecture_id,
            question_count = questions.len(),
            "Stored generated quiz"
        );

        Ok(questions)
    }

    /// Gets the stored quiz questions of a lecture.
    ///
    /// # Returns
    /// - `Ok(Vec<QuizQuestion>)` - Stored questions, oldest first (may be empty)
    /// - `Err(AppError::NotFound)` - Lecture does not exist
    pub async fn get_by_lecture_id(&self, lecture_id: i64) -> Result<Vec<QuizQuestion>, AppError> {
        if !LectureRepository::new(self.db).exists(lecture_id).await? {
            return Err(AppError::NotFound("Lecture not found".to_string()));
        }

        Ok(QuizRepository::new(self.db)
            .get_by_lecture_id(lecture_id)
            .await?)
    }
}
