//! Repository for the `cronogramas` table.
//!
//! Schedule items are always scoped by project: every accessor takes
//! the parent `proyecto_id` so a row can never be reached through the
//! wrong project URL.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::cronograma::{CreateCronograma, Cronograma, UpdateCronograma};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, proyecto_id, nombre, descripcion, fecha_inicio, fecha_fin, \
                        estado_id, created_at, updated_at";

/// Provides CRUD operations for schedule items.
pub struct CronogramaRepo;

impl CronogramaRepo {
    /// Insert a new schedule item under a project, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 3 (Pendiente).
    pub async fn create(
        pool: &PgPool,
        proyecto_id: DbId,
        input: &CreateCronograma,
    ) -> Result<Cronograma, sqlx::Error> {
        let query = format!(
            "INSERT INTO cronogramas (proyecto_id, nombre, descripcion, fecha_inicio, fecha_fin, estado_id)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cronograma>(&query)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule item by ID within a project.
    pub async fn find_by_id(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
    ) -> Result<Option<Cronograma>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cronogramas WHERE id = $1 AND proyecto_id = $2");
        sqlx::query_as::<_, Cronograma>(&query)
            .bind(id)
            .bind(proyecto_id)
            .fetch_optional(pool)
            .await
    }

    /// List the schedule items of a project ordered by start date.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Cronograma>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cronogramas WHERE proyecto_id = $1
             ORDER BY fecha_inicio ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Cronograma>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    /// Update a schedule item within a project. Only non-`None` fields
    /// in `input` are applied. Returns `None` if no matching row exists.
    pub async fn update(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
        input: &UpdateCronograma,
    ) -> Result<Option<Cronograma>, sqlx::Error> {
        let query = format!(
            "UPDATE cronogramas SET
                nombre = COALESCE($3, nombre),
                descripcion = COALESCE($4, descripcion),
                fecha_inicio = COALESCE($5, fecha_inicio),
                fecha_fin = COALESCE($6, fecha_fin),
                estado_id = COALESCE($7, estado_id)
             WHERE id = $1 AND proyecto_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cronograma>(&query)
            .bind(id)
            .bind(proyecto_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule item within a project. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, proyecto_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cronogramas WHERE id = $1 AND proyecto_id = $2")
            .bind(id)
            .bind(proyecto_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
