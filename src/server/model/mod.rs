//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Records produced by the generation
//! service are validated here before the service layer persists or returns them.

pub mod flashcard;
pub mod lecture;
pub mod quiz;
