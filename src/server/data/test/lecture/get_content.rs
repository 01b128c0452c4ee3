use super::*;

/// Tests reading only the lecture text.
///
/// Expected: Ok(Some) with the stored content
#[tokio::test]
async fn returns_content_of_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::lecture::LectureFactory::new(db)
        .content("Transactions are atomic.")
        .build()
        .await?;
    let _other = factory::create_lecture(db).await?;

    let repo = LectureRepository::new(db);
    let content = repo.get_content(lecture.id).await?;

    assert_eq!(content.as_deref(), Some("Transactions are atomic."));
    assert!(repo.exists(lecture.id).await?);

    Ok(())
}

/// Tests reading the text of an unknown lecture.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);

    assert!(repo.get_content(42).await?.is_none());

    Ok(())
}
