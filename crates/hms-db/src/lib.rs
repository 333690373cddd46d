//! # HMS DB
//!
//! PostgreSQL pool construction for the account directory.
//!
//! # Example
//!
//! ```ignore
//! use hms_config::DatabaseConfig;
//! use hms_db::init_db_pool;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! ```

use hms_config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Opens a PostgreSQL connection pool.
///
/// Call once during startup. The returned pool is cheaply cloneable and is handed
/// to the account directory, which performs one independent read per lookup.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] when the first connection cannot be
/// established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}
