//! Repository for the `convocatorias` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::convocatoria::{Convocatoria, CreateConvocatoria, UpdateConvocatoria};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, tipo, fecha_inicio, fecha_fin, fecha_inicio_ejecucion, \
                        fecha_fin_ejecucion, estado_id, created_at, updated_at";

/// Provides CRUD operations for calls-for-proposals.
pub struct ConvocatoriaRepo;

impl ConvocatoriaRepo {
    /// Insert a new call, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 3 (Pendiente).
    pub async fn create(
        pool: &PgPool,
        input: &CreateConvocatoria,
    ) -> Result<Convocatoria, sqlx::Error> {
        let query = format!(
            "INSERT INTO convocatorias
                (nombre, tipo, fecha_inicio, fecha_fin, fecha_inicio_ejecucion,
                 fecha_fin_ejecucion, estado_id)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(&input.nombre)
            .bind(&input.tipo)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.fecha_inicio_ejecucion)
            .bind(input.fecha_fin_ejecucion)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a call by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Convocatoria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM convocatorias WHERE id = $1");
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of calls, most recent submission window first.
    pub async fn list_paged(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Convocatoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM convocatorias ORDER BY fecha_inicio DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Total call count, for the pagination envelope.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM convocatorias")
            .fetch_one(pool)
            .await
    }

    /// Update a call. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateConvocatoria,
    ) -> Result<Option<Convocatoria>, sqlx::Error> {
        let query = format!(
            "UPDATE convocatorias SET
                nombre = COALESCE($2, nombre),
                tipo = COALESCE($3, tipo),
                fecha_inicio = COALESCE($4, fecha_inicio),
                fecha_fin = COALESCE($5, fecha_fin),
                fecha_inicio_ejecucion = COALESCE($6, fecha_inicio_ejecucion),
                fecha_fin_ejecucion = COALESCE($7, fecha_fin_ejecucion),
                estado_id = COALESCE($8, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.tipo)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.fecha_inicio_ejecucion)
            .bind(input.fecha_fin_ejecucion)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a call by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM convocatorias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
