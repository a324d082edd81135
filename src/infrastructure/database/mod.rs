//! Database Module
//!
//! PostgreSQL connection pool, schema bootstrap, and transaction management.

pub mod unit_of_work;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

pub use unit_of_work::execute_in_transaction;

/// Tables owned by this service, in dependency order.
const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS destinations (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description VARCHAR(255),
        location VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id BIGSERIAL PRIMARY KEY,
        destination_id BIGINT NOT NULL REFERENCES destinations(id),
        category VARCHAR(255) NOT NULL,
        amount DOUBLE PRECISION NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS itineraries (
        id BIGSERIAL PRIMARY KEY,
        destination_id BIGINT NOT NULL REFERENCES destinations(id),
        activity VARCHAR(255) NOT NULL
    )
    "#,
];

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(settings.connection_url())
        .await
}

/// Create the service tables when they are missing.
///
/// Existing tables are left untouched; there is no versioned migration history.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!(tables = SCHEMA.len(), "Database schema verified");
    Ok(())
}
