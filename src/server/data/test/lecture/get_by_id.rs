use super::*;

/// Tests fetching an existing lecture.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::lecture::LectureFactory::new(db)
        .subject_id(9)
        .title("Normalization")
        .build()
        .await?;

    let repo = LectureRepository::new(db);
    let lecture = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(lecture.id, created.id);
    assert_eq!(lecture.subject_id, 9);
    assert_eq!(lecture.title, "Normalization");
    assert_eq!(lecture.content, created.content);

    Ok(())
}

/// Tests fetching a lecture that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
