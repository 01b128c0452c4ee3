use super::*;

/// Tests creating a lecture row.
///
/// Verifies that the repository inserts the lecture with the given subject, title,
/// text and summary, and returns the generated id.
///
/// Expected: Ok with lecture created
#[tokio::test]
async fn creates_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploaded_at = Utc::now();
    let repo = LectureRepository::new(db);
    let lecture = repo
        .create(CreateLectureParams {
            subject_id: 3,
            title: "Lecture 1".to_string(),
            content: "hello world".to_string(),
            summary: "greeting".to_string(),
            uploaded_at,
        })
        .await?;

    assert_eq!(lecture.subject_id, 3);
    assert_eq!(lecture.title, "Lecture 1");
    assert_eq!(lecture.content, "hello world");
    assert_eq!(lecture.summary, "greeting");

    let db_lecture = entity::prelude::Lecture::find_by_id(lecture.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_lecture.content, "hello world");
    assert_eq!(db_lecture.summary, "greeting");

    Ok(())
}

/// Tests that consecutive uploads receive distinct ids.
///
/// Expected: Ok with two lectures and different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);
    let params = CreateLectureParams {
        subject_id: 1,
        title: "Same title".to_string(),
        content: "text".to_string(),
        summary: "summary".to_string(),
        uploaded_at: Utc::now(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that creation fails when the lectures table does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_lecture_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);
    let result = repo
        .create(CreateLectureParams {
            subject_id: 1,
            title: "Lecture".to_string(),
            content: "text".to_string(),
            summary: "summary".to_string(),
            uploaded_at: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
