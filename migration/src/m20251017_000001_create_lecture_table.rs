use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Lecture::Id))
                    .col(big_integer(Lecture::SubjectId))
                    .col(string(Lecture::Title))
                    .col(text(Lecture::Content))
                    .col(text(Lecture::Summary))
                    .col(
                        timestamp_with_time_zone(Lecture::UploadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lectures_subject_id")
                    .table(Lecture::Table)
                    .col(Lecture::SubjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    #[sea_orm(iden = "lectures")]
    Table,
    Id,
    SubjectId,
    Title,
    Content,
    Summary,
    UploadedAt,
}
