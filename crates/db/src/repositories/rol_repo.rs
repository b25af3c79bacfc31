//! Repository for the `roles` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::rol::{Rol, UpdateRol};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, created_at, updated_at";

/// Provides read and description-update operations for roles.
///
/// Role identity (id, nombre) is seeded by the migrations and never
/// changes at runtime.
pub struct RolRepo;

impl RolRepo {
    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Rol>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by wire name (case-sensitive).
    pub async fn find_by_nombre(pool: &PgPool, nombre: &str) -> Result<Option<Rol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE nombre = $1");
        sqlx::query_as::<_, Rol>(&query)
            .bind(nombre)
            .fetch_optional(pool)
            .await
    }

    /// List all roles ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Rol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        sqlx::query_as::<_, Rol>(&query).fetch_all(pool).await
    }

    /// Update a role's description. Returns `None` if the role does
    /// not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRol,
    ) -> Result<Option<Rol>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET descripcion = COALESCE($2, descripcion)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rol>(&query)
            .bind(id)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }
}
