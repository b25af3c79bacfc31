//! Repository for the `notificaciones` table.
//!
//! Notifications are always scoped by owner: reads and mutations take
//! the `usuario_id` so one user can never touch another's rows.

use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::notificacion::{CreateNotificacion, Notificacion};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario_id, titulo, mensaje, leida, fecha_envio, created_at";

/// Provides operations for notifications.
pub struct NotificacionRepo;

impl NotificacionRepo {
    /// Insert a new notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotificacion,
    ) -> Result<Notificacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO notificaciones (usuario_id, titulo, mensaje)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notificacion>(&query)
            .bind(input.usuario_id)
            .bind(&input.titulo)
            .bind(&input.mensaje)
            .fetch_one(pool)
            .await
    }

    /// List a page of a user's notifications, newest first.
    /// `solo_no_leidas` restricts to unread rows.
    pub async fn list_for_usuario(
        pool: &PgPool,
        usuario_id: DbId,
        solo_no_leidas: bool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Notificacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notificaciones
             WHERE usuario_id = $1 AND ($2 = FALSE OR leida = FALSE)
             ORDER BY fecha_envio DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notificacion>(&query)
            .bind(usuario_id)
            .bind(solo_no_leidas)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Count a user's notifications (optionally unread only), for the
    /// pagination envelope.
    pub async fn count_for_usuario(
        pool: &PgPool,
        usuario_id: DbId,
        solo_no_leidas: bool,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notificaciones
             WHERE usuario_id = $1 AND ($2 = FALSE OR leida = FALSE)",
        )
        .bind(usuario_id)
        .bind(solo_no_leidas)
        .fetch_one(pool)
        .await
    }

    /// Mark one of the user's notifications as read. Returns `true`
    /// if a row was updated.
    pub async fn mark_read(pool: &PgPool, usuario_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notificaciones SET leida = TRUE WHERE id = $1 AND usuario_id = $2",
        )
        .bind(id)
        .bind(usuario_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete one of the user's notifications. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, usuario_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notificaciones WHERE id = $1 AND usuario_id = $2")
            .bind(id)
            .bind(usuario_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
