use super::*;

/// Tests reading back stored questions.
///
/// Expected: Ok with questions ordered by id
#[tokio::test]
async fn returns_questions_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, created) = factory::helpers::create_lecture_with_quiz(db, 3).await?;
    let _unrelated = factory::helpers::create_lecture_with_quiz(db, 2).await?;

    let repo = QuizRepository::new(db);
    let questions = repo.get_by_lecture_id(lecture.id).await?;

    assert_eq!(questions.len(), 3);
    for (stored, original) in questions.iter().zip(created.iter()) {
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.question, original.question);
        assert_eq!(stored.options, vec!["A", "B", "C", "D"]);
        assert_eq!(stored.lecture_id, lecture.id);
    }

    Ok(())
}

/// Tests reading back a lecture without a quiz.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_lecture_without_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    let other = factory::create_lecture(db).await?;
    factory::quiz::QuizQuestionFactory::new(db, other.id)
        .question("Belongs elsewhere")
        .build()
        .await?;

    let repo = QuizRepository::new(db);

    assert!(repo.get_by_lecture_id(lecture.id).await?.is_empty());

    Ok(())
}

/// Tests that stored options and answer are decoded as written.
///
/// Expected: Ok with the custom options in order and the matching answer
#[tokio::test]
async fn decodes_stored_options_and_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    factory::quiz::QuizQuestionFactory::new(db, lecture.id)
        .question("Capital of France?")
        .options(vec!["Rome".to_string(), "Paris".to_string()])
        .correct_answer("Paris")
        .build()
        .await?;

    let questions = QuizRepository::new(db).get_by_lecture_id(lecture.id).await?;

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Capital of France?");
    assert_eq!(questions[0].options, vec!["Rome", "Paris"]);
    assert_eq!(questions[0].correct_answer, "Paris");

    Ok(())
}
