//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the only resources shared between
//! requests: the database connection pool and the generation service client.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::generation::GenerationClient;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn GenerationClient>` shares one client, which wraps a pooled `reqwest::Client`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the external summary/quiz/flashcard generation service.
    pub generator: Arc<dyn GenerationClient>,

    /// Largest lecture document accepted by the upload endpoint, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `generator` - Generation service client
    /// - `max_upload_bytes` - Upload size ceiling from configuration
    pub fn new(
        db: DatabaseConnection,
        generator: Arc<dyn GenerationClient>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            db,
            generator,
            max_upload_bytes,
        }
    }
}
