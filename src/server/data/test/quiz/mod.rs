use crate::server::{data::quiz::QuizRepository, model::quiz::GeneratedQuestion};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_by_lecture_id;

fn generated(question: &str, options: &[&str], correct_answer: &str) -> GeneratedQuestion {
    GeneratedQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}
