use crate::server::{data::lecture::LectureRepository, model::lecture::CreateLectureParams};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_content;
