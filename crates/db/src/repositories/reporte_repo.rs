//! Repository for the `reportes` table.

use pcg_core::estado::Estado;
use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::reporte::{CreateReporte, Reporte, UpdateReporte};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, proyecto_id, titulo, descripcion, tipo_reporte, fecha_inicio, \
                        fecha_fin, creado_por_id, aprobado, aprobado_por_id, fecha_aprobacion, \
                        estado_id, created_at, updated_at";

/// Provides CRUD operations for reportes.
pub struct ReporteRepo;

impl ReporteRepo {
    /// Insert a new report, returning the created row. The author is
    /// recorded from the request identity.
    ///
    /// If `estado_id` is `None` in the input, defaults to 3 (Pendiente).
    pub async fn create(
        pool: &PgPool,
        creado_por_id: DbId,
        input: &CreateReporte,
    ) -> Result<Reporte, sqlx::Error> {
        let query = format!(
            "INSERT INTO reportes
                (proyecto_id, titulo, descripcion, tipo_reporte, fecha_inicio, fecha_fin,
                 creado_por_id, estado_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(input.proyecto_id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.tipo_reporte)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(creado_por_id)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reporte>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportes WHERE id = $1");
        sqlx::query_as::<_, Reporte>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of reports, newest first.
    pub async fn list_paged(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Reporte>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reportes ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Total report count, for the pagination envelope.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reportes")
            .fetch_one(pool)
            .await
    }

    /// List the reports attached to a project, newest first.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Reporte>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reportes WHERE proyecto_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    /// Update a report. Only non-`None` fields in `input` are applied;
    /// approval fields are handled by [`ReporteRepo::approve`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReporte,
    ) -> Result<Option<Reporte>, sqlx::Error> {
        let query = format!(
            "UPDATE reportes SET
                proyecto_id = COALESCE($2, proyecto_id),
                titulo = COALESCE($3, titulo),
                descripcion = COALESCE($4, descripcion),
                tipo_reporte = COALESCE($5, tipo_reporte),
                fecha_inicio = COALESCE($6, fecha_inicio),
                fecha_fin = COALESCE($7, fecha_fin),
                estado_id = COALESCE($8, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(id)
            .bind(input.proyecto_id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.tipo_reporte)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Approve a report: stamp the approving user and timestamp and
    /// move the estado to Aprobado. Only pending (not-yet-approved)
    /// rows match, so approval is one-way.
    ///
    /// Returns `None` if the report does not exist or is already
    /// approved.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        aprobado_por_id: DbId,
    ) -> Result<Option<Reporte>, sqlx::Error> {
        let query = format!(
            "UPDATE reportes SET
                aprobado = TRUE,
                aprobado_por_id = $2,
                fecha_aprobacion = NOW(),
                estado_id = $3
             WHERE id = $1 AND aprobado = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(id)
            .bind(aprobado_por_id)
            .bind(Estado::Aprobado.id())
            .fetch_optional(pool)
            .await
    }

    /// Delete a report by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reportes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
