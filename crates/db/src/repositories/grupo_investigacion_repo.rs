//! Repository for the `grupos_investigacion` table.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::grupo_investigacion::{
    CreateGrupoInvestigacion, GrupoInvestigacion, UpdateGrupoInvestigacion,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, nombre, descripcion, categoria, lider_id, estado_id, created_at, updated_at";

/// Provides CRUD operations for research groups.
pub struct GrupoInvestigacionRepo;

impl GrupoInvestigacionRepo {
    /// Insert a new research group, returning the created row.
    ///
    /// If `estado_id` is `None` in the input, defaults to 1 (Activo).
    pub async fn create(
        pool: &PgPool,
        input: &CreateGrupoInvestigacion,
    ) -> Result<GrupoInvestigacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO grupos_investigacion (nombre, descripcion, categoria, lider_id, estado_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GrupoInvestigacion>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.categoria)
            .bind(input.lider_id)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find a research group by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GrupoInvestigacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grupos_investigacion WHERE id = $1");
        sqlx::query_as::<_, GrupoInvestigacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all research groups ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<GrupoInvestigacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grupos_investigacion ORDER BY nombre ASC");
        sqlx::query_as::<_, GrupoInvestigacion>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the groups led by a given user.
    pub async fn list_by_lider(
        pool: &PgPool,
        lider_id: DbId,
    ) -> Result<Vec<GrupoInvestigacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grupos_investigacion WHERE lider_id = $1 ORDER BY nombre ASC"
        );
        sqlx::query_as::<_, GrupoInvestigacion>(&query)
            .bind(lider_id)
            .fetch_all(pool)
            .await
    }

    /// Update a research group. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGrupoInvestigacion,
    ) -> Result<Option<GrupoInvestigacion>, sqlx::Error> {
        let query = format!(
            "UPDATE grupos_investigacion SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                categoria = COALESCE($4, categoria),
                lider_id = COALESCE($5, lider_id),
                estado_id = COALESCE($6, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GrupoInvestigacion>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.categoria)
            .bind(input.lider_id)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a research group by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grupos_investigacion WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
