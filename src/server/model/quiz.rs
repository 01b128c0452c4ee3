//! Quiz domain models, generated-question validation and DTO conversion.

use serde::Deserialize;
use sea_orm::DbErr;

use crate::{
    model::quiz::{GeneratedQuizDto, LectureQuizDto, QuizQuestionDto, StoredQuizQuestionDto},
    server::error::upstream::UpstreamError,
};

/// Status marker returned for a completed quiz generation.
pub const QUIZ_CREATED_STATUS: &str = "quiz created";

/// A quiz question as produced by the generation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl GeneratedQuestion {
    /// Checks that the question can be stored and shown to a student.
    ///
    /// Requires non-blank question text, at least one non-blank option, and a
    /// non-blank correct answer.
    ///
    /// # Arguments
    /// - `index` - Position of the question in the generated batch, used in the error
    ///
    /// # Returns
    /// - `Ok(())` - The question is well formed
    /// - `Err(UpstreamError::Malformed)` - A required field is missing or blank
    pub fn validate(&self, index: usize) -> Result<(), UpstreamError> {
        let reason = if self.question.trim().is_empty() {
            Some(format!("question {} has no text", index))
        } else if self.options.is_empty() {
            Some(format!("question {} has no options", index))
        } else if self.options.iter().any(|o| o.trim().is_empty()) {
            Some(format!("question {} has a blank option", index))
        } else if self.correct_answer.trim().is_empty() {
            Some(format!("question {} has no correct answer", index))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(UpstreamError::Malformed {
                endpoint: "/quiz",
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn into_dto(self) -> QuizQuestionDto {
        QuizQuestionDto {
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}

/// Converts a generated batch into the quiz generation response.
pub fn into_generated_quiz_dto(questions: Vec<GeneratedQuestion>) -> GeneratedQuizDto {
    GeneratedQuizDto {
        status: QUIZ_CREATED_STATUS.to_string(),
        questions: questions.into_iter().map(GeneratedQuestion::into_dto).collect(),
    }
}

/// A quiz question read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: i64,
    pub lecture_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Converts an entity model to a quiz question at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(QuizQuestion)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored options column is not an array of strings
    pub fn from_entity(entity: entity::quiz::Model) -> Result<Self, DbErr> {
        let options: Vec<String> = serde_json::from_value(entity.options).map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse options for quiz question {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            lecture_id: entity.lecture_id,
            question: entity.question,
            options,
            correct_answer: entity.correct_answer,
        })
    }

    pub fn into_dto(self) -> StoredQuizQuestionDto {
        StoredQuizQuestionDto {
            id: self.id,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}

/// Converts stored questions of a lecture into the read-back response.
pub fn into_lecture_quiz_dto(lecture_id: i64, questions: Vec<QuizQuestion>) -> LectureQuizDto {
    LectureQuizDto {
        lecture_id,
        questions: questions.into_iter().map(QuizQuestion::into_dto).collect(),
    }
}
