//! SeaORM entities for the lecture gateway schema.

pub mod prelude;

pub mod lecture;
pub mod quiz;
