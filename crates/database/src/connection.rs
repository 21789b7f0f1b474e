use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The URL comes from the settings when present, otherwise from
/// `DATABASE_URL` (a `.env` file is honoured).
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let database_url = match &settings.url {
        Some(url) => url.clone(),
        None => {
            dotenvy::dotenv().ok();
            env::var("DATABASE_URL").map_err(|_e| {
                DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string())
            })?
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections = settings.max_connections, "Connected to inventory database.");
    Ok(pool)
}

/// Applies pending migrations so the `tools` and `categories` tables exist.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
