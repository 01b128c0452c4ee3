//! HTTP request handlers.
//!
//! Controllers extract and validate the request, convert it to domain parameters, call
//! the matching service and convert the result to a DTO. Every handler returns
//! `Result<impl IntoResponse, AppError>` so failures share one error mapping.

pub mod flashcard;
pub mod health;
pub mod lecture;
pub mod quiz;

#[cfg(test)]
mod test;
