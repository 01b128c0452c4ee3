//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a lecture together with a stored quiz of `question_count` questions.
///
/// # Arguments
/// - `db` - Database connection
/// - `question_count` - Number of quiz questions to attach to the lecture
///
/// # Returns
/// - `Ok((lecture, questions))` - Created lecture and its quiz rows in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lecture_with_quiz(
    db: &DatabaseConnection,
    question_count: usize,
) -> Result<(entity::lecture::Model, Vec<entity::quiz::Model>), DbErr> {
    let lecture = crate::factory::lecture::create_lecture(db).await?;
    let questions =
        crate::factory::quiz::create_quiz_questions(db, lecture.id, question_count).await?;

    Ok((lecture, questions))
}
