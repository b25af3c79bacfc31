//! Repository for the `lineas_investigacion` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::linea_investigacion::{
    CreateLineaInvestigacion, LineaInvestigacion, UpdateLineaInvestigacion,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, estado_id, created_at, updated_at";

/// Provides CRUD operations for research lines.
pub struct LineaInvestigacionRepo;

impl LineaInvestigacionRepo {
    /// Insert a new research line, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(
        pool: &PgPool,
        input: &CreateLineaInvestigacion,
    ) -> Result<LineaInvestigacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO lineas_investigacion (nombre, descripcion, estado_id)
             VALUES ($1, $2, COALESCE($3, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LineaInvestigacion>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a research line by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LineaInvestigacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lineas_investigacion WHERE id = $1");
        sqlx::query_as::<_, LineaInvestigacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all research lines ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<LineaInvestigacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lineas_investigacion ORDER BY nombre ASC");
        sqlx::query_as::<_, LineaInvestigacion>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a research line. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLineaInvestigacion,
    ) -> Result<Option<LineaInvestigacion>, sqlx::Error> {
        let query = format!(
            "UPDATE lineas_investigacion SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                estado_id = COALESCE($4, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LineaInvestigacion>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a research line by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lineas_investigacion WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
