//! Repository for the `anexos` table. Rows are scoped by project.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::anexo::{Anexo, CreateAnexo, UpdateAnexo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, proyecto_id, nombre, archivo_url, subido_por_id, estado_id, \
                        created_at, updated_at";

/// Provides CRUD operations for attachments.
pub struct AnexoRepo;

impl AnexoRepo {
    /// Insert a new attachment under a project, returning the created
    /// row. The uploader is recorded from the request identity.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(
        pool: &PgPool,
        proyecto_id: DbId,
        subido_por_id: DbId,
        input: &CreateAnexo,
    ) -> Result<Anexo, sqlx::Error> {
        let query = format!(
            "INSERT INTO anexos (proyecto_id, nombre, archivo_url, subido_por_id, estado_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anexo>(&query)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.archivo_url)
            .bind(subido_por_id)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find an attachment by ID within a project.
    pub async fn find_by_id(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
    ) -> Result<Option<Anexo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM anexos WHERE id = $1 AND proyecto_id = $2");
        sqlx::query_as::<_, Anexo>(&query)
            .bind(id)
            .bind(proyecto_id)
            .fetch_optional(pool)
            .await
    }

    /// List the attachments of a project, newest first.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Anexo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM anexos WHERE proyecto_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Anexo>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    /// Update an attachment within a project. Only non-`None` fields
    /// in `input` are applied. Returns `None` if no matching row exists.
    pub async fn update(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
        input: &UpdateAnexo,
    ) -> Result<Option<Anexo>, sqlx::Error> {
        let query = format!(
            "UPDATE anexos SET
                nombre = COALESCE($3, nombre),
                archivo_url = COALESCE($4, archivo_url),
                estado_id = COALESCE($5, estado_id)
             WHERE id = $1 AND proyecto_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anexo>(&query)
            .bind(id)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.archivo_url)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attachment within a project. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, proyecto_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM anexos WHERE id = $1 AND proyecto_id = $2")
            .bind(id)
            .bind(proyecto_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
