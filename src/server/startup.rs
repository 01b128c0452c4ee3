use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    generation::{GenerationClient, HttpGenerationClient},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration (SQLite
/// or PostgreSQL), then runs all pending SeaORM migrations so the `lectures` and
/// `quizzes` tables exist before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and timeouts
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for all outbound generation requests.
///
/// Redirects are disabled so the gateway only ever talks to the configured service.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.ml_connect_timeout)
        .build()?;

    Ok(client)
}

/// Builds the generation service client from configuration.
pub fn setup_generation_client(config: &Config) -> Result<Arc<dyn GenerationClient>, AppError> {
    let http_client = setup_reqwest_client(config)?;

    Ok(Arc::new(HttpGenerationClient::new(
        http_client,
        config.ml_service_url.clone(),
        config.ml_request_timeout,
    )))
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
