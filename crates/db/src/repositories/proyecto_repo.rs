//! Repository for the `proyectos` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::proyecto::{CreateProyecto, Proyecto, UpdateProyecto};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, resumen, objetivos, problematica, fecha_inicio, \
                        convocatoria_id, grupo_investigacion_id, linea_investigacion_id, \
                        responsable_id, estado_id, created_at, updated_at";

/// Provides CRUD operations for proyectos.
pub struct ProyectoRepo;

impl ProyectoRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 3 (Pendiente).
    pub async fn create(pool: &PgPool, input: &CreateProyecto) -> Result<Proyecto, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyectos
                (titulo, resumen, objetivos, problematica, fecha_inicio, convocatoria_id,
                 grupo_investigacion_id, linea_investigacion_id, responsable_id, estado_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, 3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(&input.titulo)
            .bind(&input.resumen)
            .bind(&input.objetivos)
            .bind(&input.problematica)
            .bind(input.fecha_inicio)
            .bind(input.convocatoria_id)
            .bind(input.grupo_investigacion_id)
            .bind(input.linea_investigacion_id)
            .bind(input.responsable_id)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Proyecto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos WHERE id = $1");
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of projects ordered by most recently created first.
    pub async fn list_paged(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Total project count, for the pagination envelope.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM proyectos")
            .fetch_one(pool)
            .await
    }

    /// List the projects attached to a call.
    pub async fn list_by_convocatoria(
        pool: &PgPool,
        convocatoria_id: DbId,
    ) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos WHERE convocatoria_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(convocatoria_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProyecto,
    ) -> Result<Option<Proyecto>, sqlx::Error> {
        let query = format!(
            "UPDATE proyectos SET
                titulo = COALESCE($2, titulo),
                resumen = COALESCE($3, resumen),
                objetivos = COALESCE($4, objetivos),
                problematica = COALESCE($5, problematica),
                fecha_inicio = COALESCE($6, fecha_inicio),
                convocatoria_id = COALESCE($7, convocatoria_id),
                grupo_investigacion_id = COALESCE($8, grupo_investigacion_id),
                linea_investigacion_id = COALESCE($9, linea_investigacion_id),
                responsable_id = COALESCE($10, responsable_id),
                estado_id = COALESCE($11, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.resumen)
            .bind(&input.objetivos)
            .bind(&input.problematica)
            .bind(input.fecha_inicio)
            .bind(input.convocatoria_id)
            .bind(input.grupo_investigacion_id)
            .bind(input.linea_investigacion_id)
            .bind(input.responsable_id)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Child rows (cronogramas, recursos,
    /// anexos, evaluaciones) cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
