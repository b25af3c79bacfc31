//! Repository for the `usuarios` table.

use pcg_core::estado::Estado;
use pcg_core::types::DbId;
use sqlx::PgPool;

use crate::models::usuario::{CreateUsuario, UpdateUsuario, Usuario};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, correo, contrasena_hash, telefono, rol_id, estado_id, \
                        ultima_sesion, created_at, updated_at";

/// Provides CRUD operations for usuarios.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUsuario) -> Result<Usuario, sqlx::Error> {
        let query = format!(
            "INSERT INTO usuarios (nombre, correo, contrasena_hash, telefono, rol_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(&input.nombre)
            .bind(&input.correo)
            .bind(&input.contrasena_hash)
            .bind(&input.telefono)
            .bind(input.rol_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by correo (case-sensitive).
    pub async fn find_by_correo(
        pool: &PgPool,
        correo: &str,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE correo = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(correo)
            .fetch_optional(pool)
            .await
    }

    /// List a page of users ordered by most recently created first.
    pub async fn list_paged(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Usuario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM usuarios ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Total user count, for the pagination envelope.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
            .fetch_one(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUsuario,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!(
            "UPDATE usuarios SET
                nombre = COALESCE($2, nombre),
                correo = COALESCE($3, correo),
                telefono = COALESCE($4, telefono),
                rol_id = COALESCE($5, rol_id),
                estado_id = COALESCE($6, estado_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.correo)
            .bind(&input.telefono)
            .bind(input.rol_id)
            .bind(input.estado_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a user by moving its estado to Inactivo.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE usuarios SET estado_id = $2 WHERE id = $1 AND estado_id <> $2",
        )
        .bind(id)
        .bind(Estado::Inactivo.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful login by stamping `ultima_sesion`.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE usuarios SET ultima_sesion = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        contrasena_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE usuarios SET contrasena_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(contrasena_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
