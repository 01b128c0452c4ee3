//! Quiz factory for creating stored quiz question entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quiz questions with customizable fields.
pub struct QuizQuestionFactory<'a> {
    db: &'a DatabaseConnection,
    lecture_id: i64,
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl<'a> QuizQuestionFactory<'a> {
    /// Creates a new QuizQuestionFactory with default values.
    ///
    /// Defaults:
    /// - question: `"Question {id}?"` where id is auto-incremented
    /// - options: `["A", "B", "C", "D"]`
    /// - correct_answer: `"A"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `lecture_id` - Lecture the question belongs to
    pub fn new(db: &'a DatabaseConnection, lecture_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            lecture_id,
            question: format!("Question {}?", id),
            options: ["A", "B", "C", "D"].iter().map(|o| o.to_string()).collect(),
            correct_answer: "A".to_string(),
        }
    }

    /// Sets the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Sets the answer choices.
    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Sets the correct answer.
    pub fn correct_answer(mut self, correct_answer: impl Into<String>) -> Self {
        self.correct_answer = correct_answer.into();
        self
    }

    /// Builds and inserts the quiz question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quiz::Model)` - Created quiz entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quiz::Model, DbErr> {
        entity::quiz::ActiveModel {
            id: ActiveValue::NotSet,
            lecture_id: ActiveValue::Set(self.lecture_id),
            question: ActiveValue::Set(self.question),
            options: ActiveValue::Set(serde_json::json!(self.options)),
            correct_answer: ActiveValue::Set(self.correct_answer),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quiz question with default values for the given lecture.
pub async fn create_quiz_question(
    db: &DatabaseConnection,
    lecture_id: i64,
) -> Result<entity::quiz::Model, DbErr> {
    QuizQuestionFactory::new(db, lecture_id).build().await
}

/// Creates `count` default quiz questions for the given lecture, in order.
pub async fn create_quiz_questions(
    db: &DatabaseConnection,
    lecture_id: i64,
    count: usize,
) -> Result<Vec<entity::quiz::Model>, DbErr> {
    let mut questions = Vec::with_capacity(count);
    for _ in 0..count {
        questions.push(create_quiz_question(db, lecture_id).await?);
    }
    Ok(questions)
}
