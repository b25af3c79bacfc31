//! Repository for the `programas` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::programa::{CreatePrograma, Programa, UpdatePrograma};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, facultad_id, estado_id, created_at, updated_at";

/// Provides CRUD operations for programas.
pub struct ProgramaRepo;

impl ProgramaRepo {
    /// Insert a new program, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(pool: &PgPool, input: &CreatePrograma) -> Result<Programa, sqlx::Error> {
        let query = format!(
            "INSERT INTO programas (nombre, descripcion, facultad_id, estado_id)
             VALUES ($1, $2, $3, COALESCE($4, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programa>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.facultad_id)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a program by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Programa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programas WHERE id = $1");
        sqlx::query_as::<_, Programa>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all programs ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Programa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programas ORDER BY nombre ASC");
        sqlx::query_as::<_, Programa>(&query).fetch_all(pool).await
    }

    /// Update a program. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrograma,
    ) -> Result<Option<Programa>, sqlx::Error> {
        let query = format!(
            "UPDATE programas SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                facultad_id = COALESCE($4, facultad_id),
                estado_id = COALESCE($5, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programa>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.facultad_id)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a program by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
