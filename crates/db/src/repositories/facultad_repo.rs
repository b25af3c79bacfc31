//! Repository for the `facultades` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::facultad::{CreateFacultad, Facultad, UpdateFacultad};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, estado_id, created_at, updated_at";

/// Provides CRUD operations for facultades.
pub struct FacultadRepo;

impl FacultadRepo {
    /// Insert a new faculty, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(pool: &PgPool, input: &CreateFacultad) -> Result<Facultad, sqlx::Error> {
        let query = format!(
            "INSERT INTO facultades (nombre, descripcion, estado_id)
             VALUES ($1, $2, COALESCE($3, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Facultad>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a faculty by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Facultad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facultades WHERE id = $1");
        sqlx::query_as::<_, Facultad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all faculties ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Facultad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facultades ORDER BY nombre ASC");
        sqlx::query_as::<_, Facultad>(&query).fetch_all(pool).await
    }

    /// Update a faculty. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFacultad,
    ) -> Result<Option<Facultad>, sqlx::Error> {
        let query = format!(
            "UPDATE facultades SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                estado_id = COALESCE($4, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Facultad>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a faculty by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facultades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
