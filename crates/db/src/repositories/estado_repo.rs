//! Repository for the `estados` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::estado::Estado;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, created_at";

/// Provides read operations for the seeded estados.
pub struct EstadoRepo;

impl EstadoRepo {
    /// Find an estado by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Estado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estados WHERE id = $1");
        sqlx::query_as::<_, Estado>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all estados in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Estado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estados ORDER BY id ASC");
        sqlx::query_as::<_, Estado>(&query).fetch_all(pool).await
    }
}
