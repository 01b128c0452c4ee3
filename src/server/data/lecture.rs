use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::server::model::lecture::{CreateLectureParams, Lecture};

pub struct LectureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LectureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a lecture and returns it with its generated id.
    pub async fn create(&self, params: CreateLectureParams) -> Result<Lecture, DbErr> {
        let lecture = entity::lecture::ActiveModel {
            subject_id: ActiveValue::Set(params.subject_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            summary: ActiveValue::Set(params.summary),
            uploaded_at: ActiveValue::Set(params.uploaded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lecture::from_entity(lecture))
    }

    /// Gets a lecture by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Lecture>, DbErr> {
        let lecture = entity::prelude::Lecture::find_by_id(id).one(self.db).await?;

        Ok(lecture.map(Lecture::from_entity))
    }

    /// Fetches only the full text of a lecture.
    ///
    /// Avoids loading the summary and metadata when the caller only needs the
    /// source text for generation.
    pub async fn get_content(&self, id: i64) -> Result<Option<String>, DbErr> {
        entity::prelude::Lecture::find()
            .select_only()
            .column(entity::lecture::Column::Content)
            .filter(entity::lecture::Column::Id.eq(id))
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    /// Checks whether a lecture with the given ID exists.
    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let found = entity::prelude::Lecture::find()
            .select_only()
            .column(entity::lecture::Column::Id)
            .filter(entity::lecture::Column::Id.eq(id))
            .into_tuple::<i64>()
            .one(self.db)
            .await?;

        Ok(found.is_some())
    }
}
