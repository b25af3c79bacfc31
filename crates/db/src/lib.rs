//! PostgreSQL access layer for PCG.
//!
//! - [`models`] -- row structs and DTOs, one module per table.
//! - [`repositories`] -- zero-sized repository structs with async CRUD
//!   methods taking `&PgPool`.
//!
//! Migrations live in `migrations/` and are embedded at compile time;
//! the seed data for the fixed reference tables (`estados`, `roles`)
//! ships with them.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used by the health endpoint and startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
