//! Repository for the `evaluaciones` table. Rows are scoped by project.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::evaluacion::{CreateEvaluacion, Evaluacion, UpdateEvaluacion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, proyecto_id, evaluador_id, concepto, observaciones, \
                        fecha_evaluacion, estado_id, created_at, updated_at";

/// Provides CRUD operations for evaluations.
pub struct EvaluacionRepo;

impl EvaluacionRepo {
    /// Insert a new evaluation under a project, returning the created
    /// row. The evaluator is recorded from the request identity.
    ///
    /// If `estado_id` is `None` in the input, defaults to 3 (Pendiente).
    pub async fn create(
        pool: &PgPool,
        proyecto_id: DbId,
        evaluador_id: DbId,
        input: &CreateEvaluacion,
    ) -> Result<Evaluacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluaciones
                (proyecto_id, evaluador_id, concepto, observaciones, fecha_evaluacion, estado_id)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluacion>(&query)
            .bind(proyecto_id)
            .bind(evaluador_id)
            .bind(&input.concepto)
            .bind(&input.observaciones)
            .bind(input.fecha_evaluacion)
            .bind(input.estado_id)
            .fetch_one(pool)
            .await
    }

    /// Find an evaluation by ID within a project.
    pub async fn find_by_id(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
    ) -> Result<Option<Evaluacion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM evaluaciones WHERE id = $1 AND proyecto_id = $2");
        sqlx::query_as::<_, Evaluacion>(&query)
            .bind(id)
            .bind(proyecto_id)
            .fetch_optional(pool)
            .await
    }

    /// List the evaluations of a project, newest first.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Evaluacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM evaluaciones WHERE proyecto_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Evaluacion>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    /// Update an evaluation within a project. Only non-`None` fields
    /// in `input` are applied. Returns `None` if no matching row exists.
    pub async fn update(
        pool: &PgPool,
        proyecto_id: DbId,
        id: DbId,
        input: &UpdateEvaluacion,
    ) -> Result<Option<Evaluacion>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluaciones SET
                concepto = COALESCE($3, concepto),
                observaciones = COALESCE($4, observaciones),
                fecha_evaluacion = COALESCE($5, fecha_evaluacion),
                estado_id = COALESCE($6, estado_id)
             WHERE id = $1 AND proyecto_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluacion>(&query)
            .bind(id)
            .bind(proyecto_id)
            .bind(&input.concepto)
            .bind(&input.observaciones)
            .bind(input.fecha_evaluacion)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an evaluation within a project. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, proyecto_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evaluaciones WHERE id = $1 AND proyecto_id = $2")
            .bind(id)
            .bind(proyecto_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
