//! Repository for the `recursos` table. Rows are scoped by project.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::recurso::{CreateRecurso, Recurso, UpdateRecurso};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, proyecto_id, nombre, descripcion, tipo, monto, estado_id, created_at, updated_at";

/// Provides CRUD operations for project resources.
pub struct RecursoRepo;

impl RecursoRepo {
    /// Insert a new resource under a project, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(
        pool: &PgPool,
        proyecto_id: DbId,
        input: &CreateRecurso,
    ) -> Result<Recurso, sqlx::Error> {
        let query = format!(
            "INSERT INTO recursos (proyecto_id, nombre, descripcion, tipo, monto, estado_id)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recurso>(&query)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.tipo)
            .bind(input.monto)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by ID within a project.
    pub async fn find_by_id(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
    ) -> Result<Option<Recurso>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recursos WHERE id = $1 AND proyecto_id = $2");
        sqlx::query_as::<_, Recurso>(&query)
            .bind(id)
            .bind(proyecto_id)
            .fetch_optional(pool)
            .await
    }

    /// List the resources of a project ordered by name.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Recurso>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM recursos WHERE proyecto_id = $1 ORDER BY nombre ASC");
        sqlx::query_as::<_, Recurso>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    /// Update a resource within a project. Only non-`None` fields in
    /// `input` are applied. Returns `None` if no matching row exists.
    pub async fn update(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
        input: &UpdateRecurso,
    ) -> Result<Option<Recurso>, sqlx::Error> {
        let query = format!(
            "UPDATE recursos SET
                nombre = COALESCE($3, nombre),
                descripcion = COALESCE($4, descripcion),
                tipo = COALESCE($5, tipo),
                monto = COALESCE($6, monto),
                estado_id = COALESCE($7, estado_id)
             WHERE id = $1 AND proyecto_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recurso>(&query)
            .bind(id)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.tipo)
            .bind(input.monto)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource within a project. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, proyecto_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recursos WHERE id = $1 AND proyecto_id = $2")
            .bind(id)
            .bind(proyecto_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
