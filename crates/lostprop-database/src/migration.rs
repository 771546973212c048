//! Bootstrap schema runner.

use sqlx::PgPool;
use tracing::info;

use lostprop_core::error::{AppError, ErrorKind};

/// Apply the embedded bootstrap schema if it has not been applied yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed");
    Ok(())
}
