/// Connection pool for the SQL backend
///
/// Built once at startup from [`DatabaseConfig`] and handed to the repository
/// by value. Uses the sqlx `Any` driver so the same code serves PostgreSQL in
/// production and SQLite files in tests.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

/// Upper bound on open connections (idle ones included)
pub const MAX_CONNECTIONS: u32 = 3;

/// Connections older than this are closed and replaced
pub const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Open the pool described by `config`
pub async fn connect_pool(config: &DatabaseConfig) -> Result<AnyPool> {
    sqlx::any::install_default_drivers();

    tracing::info!(
        "🗄️ Connecting database pool: {} (max {} connections)",
        config.redacted_url(),
        MAX_CONNECTIONS
    );

    let pool = AnyPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(0)
        .max_lifetime(MAX_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.connection_url())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    tracing::info!("✅ Database pool ready");

    Ok(pool)
}

/// Close the pool, waiting for checked-out connections to come back
pub async fn close_pool(pool: &AnyPool) {
    tracing::info!("Closing database pool");
    pool.close().await;
}
