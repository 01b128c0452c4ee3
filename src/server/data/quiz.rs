//! Quiz question repository.
//!
//! Generated questions for a lecture are written as one batch inside a single
//! transaction: either every question of the batch is stored or none is.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::quiz::{GeneratedQuestion, QuizQuestion};

pub struct QuizRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a generated batch of questions for a lecture.
    ///
    /// Rows are inserted in batch order so ascending ids follow generation order.
    /// An empty batch performs no writes.
    ///
    /// # Arguments
    /// - `lecture_id` - Lecture the questions were generated from
    /// - `questions` - Questions in generation order
    ///
    /// # Returns
    /// - `Ok(Vec<QuizQuestion>)` - Stored questions in generation order
    /// - `Err(DbErr)` - An insert failed; the whole batch was rolled back
    pub async fn create_many(
        &self,
        lecture_id: i64,
        questions: &[GeneratedQuestion],
    ) -> Result<Vec<QuizQuestion>, DbErr> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;

        let mut stored = Vec::with_capacity(questions.len());
        for question in questions {
            let model = entity::quiz::ActiveModel {
                lecture_id: ActiveValue::Set(lecture_id),
                question: ActiveValue::Set(question.question.clone()),
                options: ActiveValue::Set(serde_json::json!(question.options)),
                correct_answer: ActiveValue::Set(question.correct_answer.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            stored.push(QuizQuestion::from_entity(model)?);
        }

        txn.commit().await?;

        Ok(stored)
    }

    /// Gets every stored question of a lecture, oldest first.
    pub async fn get_by_lecture_id(&self, lecture_id: i64) -> Result<Vec<QuizQuestion>, DbErr> {
        entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::LectureId.eq(lecture_id))
            .order_by_asc(entity::quiz::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(QuizQuestion::from_entity)
            .collect()
    }

    /// Counts stored questions of a lecture.
    #[cfg(test)]
    pub async fn count_by_lecture_id(&self, lecture_id: i64) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::LectureId.eq(lecture_id))
            .count(self.db)
            .await
    }
}
