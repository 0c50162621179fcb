//! Database connection pool management
//!
//! Connection pooling uses SQLx with MySQL. Pool sizing and timeouts come
//! from `reg_shared::DatabaseConfig`.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use reg_core::errors::DomainError;
use reg_shared::DatabaseConfig;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to connect to database: {}", e)))
}
