//! Wire-level DTOs returned to and accepted from API clients.

pub mod api;
pub mod flashcard;
pub mod lecture;
pub mod quiz;
