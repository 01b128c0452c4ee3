use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::api::ErrorDto,
    server::{
        config::DEFAULT_MAX_UPLOAD_BYTES,
        generation::fake::FakeGenerationClient,
        model::{flashcard::Flashcard, quiz::GeneratedQuestion},
        router::router,
        state::AppState,
    },
};


/// Test server wired to an in-memory database and a fake generation service.
struct TestApp {
    server: TestServer,
    db: DatabaseConnection,
    generator: Arc<FakeGenerationClient>,
}

async fn setup(generator: FakeGenerationClient) -> TestApp {
    setup_with_upload_limit(generator, DEFAULT_MAX_UPLOAD_BYTES).await
}

async fn setup_with_upload_limit(
    generator: FakeGenerationClient,
    max_upload_bytes: usize,
) -> TestApp {
    let test = TestBuilder::new()
        .with_lecture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let generator = Arc::new(generator);
    let state = AppState::new(db.clone(), generator.clone(), max_upload_bytes);
    let server = TestServer::new(router(max_upload_bytes).with_state(state)).unwrap();

    TestApp {
        server,
        db,
        generator,
    }
}

async fn quiz_row_count(db: &DatabaseConnection, lecture_id: i64) -> u64 {
    entity::prelude::Quiz::find()
        .filter(entity::quiz::Column::LectureId.eq(lecture_id))
        .count(db)
        .await
        .unwrap()
}

fn question(question: &str, options: &[&str], correct_answer: &str) -> GeneratedQuestion {
    GeneratedQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}

fn flashcard(question: &str, answer: &str) -> Flashcard {
    Flashcard {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}
