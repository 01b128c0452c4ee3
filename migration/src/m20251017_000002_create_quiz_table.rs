use sea_orm_migration::{prelude::*, schema::*};

use super::m20251017_000001_create_lecture_table::Lecture;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Quiz::Id))
                    .col(big_integer(Quiz::LectureId))
                    .col(text(Quiz::Question))
                    .col(json(Quiz::Options))
                    .col(text(Quiz::CorrectAnswer))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_lecture_id")
                            .from(Quiz::Table, Quiz::LectureId)
                            .to(Lecture::Table, Lecture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quiz {
    #[sea_orm(iden = "quizzes")]
    Table,
    Id,
    LectureId,
    Question,
    Options,
    CorrectAnswer,
}
