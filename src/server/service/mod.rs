//! Service layer orchestrating the ingestion flows.
//!
//! Each service validates its input, fetches lecture text where needed, calls the
//! generation service, and persists results through the repositories. Every flow is
//! one sequential pass per request with no state kept between requests.

pub mod flashcard;
pub mod lecture;
pub mod quiz;
