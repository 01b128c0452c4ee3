use super::*;

/// Tests storing a generated batch.
///
/// Verifies one row per question, associated with the lecture, with options kept in
/// order.
///
/// Expected: Ok with two rows in generation order
#[tokio::test]
async fn stores_one_row_per_question_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    let batch = vec![
        generated("What is 1NF?", &["Atomic values", "No keys"], "Atomic values"),
        generated("What is a join?", &["Combining tables", "Deleting rows"], "Combining tables"),
    ];

    let repo = QuizRepository::new(db);
    let stored = repo.create_many(lecture.id, &batch).await?;

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].question, "What is 1NF?");
    assert_eq!(stored[1].question, "What is a join?");
    assert!(stored[0].id < stored[1].id);
    assert_eq!(stored[0].options, vec!["Atomic values", "No keys"]);

    let rows = entity::prelude::Quiz::find()
        .filter(entity::quiz::Column::LectureId.eq(lecture.id))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(repo.count_by_lecture_id(lecture.id).await?, 2);

    Ok(())
}

/// Tests that an empty batch writes nothing.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn empty_batch_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;

    let repo = QuizRepository::new(db);
    let stored = repo.create_many(lecture.id, &[]).await?;

    assert!(stored.is_empty());
    assert_eq!(repo.count_by_lecture_id(lecture.id).await?, 0);

    Ok(())
}

/// Tests that a failed batch reports an error.
///
/// Without a quizzes table every insert fails, so the call must return the error
/// rather than a partial result.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_quiz_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lecture)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;

    let repo = QuizRepository::new(db);
    let result = repo
        .create_many(lecture.id, &[generated("Q?", &["A"], "A")])
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that batches for different lectures stay separate.
///
/// Expected: Ok with each lecture seeing only its own rows
#[tokio::test]
async fn keeps_batches_per_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_lecture(db).await?;
    let second = factory::create_lecture(db).await?;

    let repo = QuizRepository::new(db);
    repo.create_many(first.id, &[generated("Q1?", &["A"], "A")])
        .await?;
    repo.create_many(
        second.id,
        &[generated("Q2?", &["B"], "B"), generated("Q3?", &["C"], "C")],
    )
    .await?;

    assert_eq!(repo.count_by_lecture_id(first.id).await?, 1);
    assert_eq!(repo.count_by_lecture_id(second.id).await?, 2);

    Ok(())
}

/// Tests that a batch failing partway is rolled back.
///
/// A trigger rejects the second question of the batch after the first has already
/// been inserted inside the transaction.
///
/// Expected: Err and no rows stored for the lecture
#[tokio::test]
async fn rolls_back_batch_when_later_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TRIGGER reject_second_question BEFORE INSERT ON quizzes \
         WHEN NEW.question = 'Second?' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .await?;

    let lecture = factory::create_lecture(db).await?;
    let batch = vec![
        generated("First?", &["a", "b"], "a"),
        generated("Second?", &["a", "b"], "b"),
        generated("Third?", &["a", "b"], "a"),
    ];

    let repo = QuizRepository::new(db);
    let result = repo.create_many(lecture.id, &batch).await;

    assert!(result.is_err());
    assert_eq!(repo.count_by_lecture_id(lecture.id).await?, 0);

    Ok(())
}
