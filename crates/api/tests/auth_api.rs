//! HTTP-level integration tests for authentication and authorization.
//!
//! Tests cover login (including enumeration resistance), the profile
//! endpoint, password changes, and the 401-vs-403 split on role-gated
//! routes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get, get_auth, login_token, post_form, post_json,
    post_json_auth, put_json_auth,
};
use pcg_db::repositories::UsuarioRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with a bearer access token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "admin@example.com", 1).await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", "admin@example.com"), ("password", &password)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(
        json["access_token"].is_string(),
        "response must contain access_token"
    );
    assert_eq!(json["token_type"], "bearer");
}

/// The issued token's role claim matches the user's stored role: the
/// profile endpoint reports the role the user was created with.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_token_carries_stored_role(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "lider@example.com", 2).await;

    let token = login_token(
        common::build_test_app(pool.clone()),
        "lider@example.com",
        &password,
    )
    .await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["rol"], "lider");
    assert_eq!(json["correo"], "lider@example.com");
}

/// Login stamps ultima_sesion.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_records_last_session(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "sesion@example.com", 3).await;
    assert!(user.ultima_sesion.is_none());

    login_token(
        common::build_test_app(pool.clone()),
        "sesion@example.com",
        &password,
    )
    .await;

    let reloaded = UsuarioRepo::find_by_id(&pool, user.id)
        .await
        .expect("query should succeed")
        .expect("user should exist");
    assert!(
        reloaded.ultima_sesion.is_some(),
        "ultima_sesion must be stamped on login"
    );
}

/// Wrong password and unknown correo must be indistinguishable: same
/// status, same body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_enumeration_resistance(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "existe@example.com", 3).await;

    let wrong_password = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        &[
            ("username", "existe@example.com"),
            ("password", "incorrecta"),
        ],
    )
    .await;

    let unknown_user = post_form(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        &[("username", "fantasma@example.com"), ("password", "da igual")],
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_user).await;
    assert_eq!(
        body_a, body_b,
        "both invalid-credential causes must produce the identical error body"
    );
}

/// Login to a deactivated account returns 403, not 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactivo@example.com", 3).await;
    UsuarioRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        &[
            ("username", "inactivo@example.com"),
            ("password", &password),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Token verification
// ---------------------------------------------------------------------------

/// A garbage token on a protected route returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", "no-es-un-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed with a different secret returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_signature_rejected(pool: PgPool) {
    use pcg_api::auth::jwt::{generate_access_token, JwtConfig};
    use pcg_core::rol::Rol;

    let foreign = JwtConfig {
        secret: "otro-secreto-distinto".to_string(),
        expiry_mins: 30,
    };
    let token = generate_access_token(1, Rol::Admin, &foreign).expect("generation should succeed");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// 401 vs 403
// ---------------------------------------------------------------------------

/// An anonymous request against a role-gated route returns 401
/// (unauthenticated), never 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_is_unauthenticated_not_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/usuarios").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// No entity can be mutated without a token: an anonymous create
/// attempt is rejected with 401 before touching the database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_cannot_mutate(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Sin permiso"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM proyectos")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 0, "nothing may be written by an anonymous request");
}

/// An authenticated non-admin against an admin route returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_role_is_forbidden(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "inv@example.com", 3).await;
    let token = login_token(
        common::build_test_app(pool.clone()),
        "inv@example.com",
        &password,
    )
    .await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/usuarios", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

/// End-to-end gate scenario: an admin passes an admin-gated operation
/// and is denied on a gestión-exclusive surface only when the set says
/// so. Here: admin passes /admin/usuarios; a lider is forbidden there
/// but passes a gestión-gated write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_vs_lider_gates(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@example.com", 1).await;
    let (_lider, lider_pw) = create_test_user(&pool, "lider@example.com", 2).await;

    let admin_token = login_token(
        common::build_test_app(pool.clone()),
        "admin@example.com",
        &admin_pw,
    )
    .await;
    let lider_token = login_token(
        common::build_test_app(pool.clone()),
        "lider@example.com",
        &lider_pw,
    )
    .await;

    // Admin allowed on the admin-only listing.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/usuarios",
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Lider forbidden there.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/usuarios",
        &lider_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Lider allowed on a gestión-gated write.
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/facultades",
        serde_json::json!({ "nombre": "Facultad de Ingeniería" }),
        &lider_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Password management
// ---------------------------------------------------------------------------

/// A user can change their own password and log in with the new one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_own_password(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "cambio@example.com", 3).await;
    let token = login_token(
        common::build_test_app(pool.clone()),
        "cambio@example.com",
        &password,
    )
    .await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/password",
        serde_json::json!({
            "contrasena_actual": password,
            "contrasena_nueva": "nueva_clave_segura_456"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Old password no longer works.
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        &[("username", "cambio@example.com"), ("password", &password)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // New password does.
    login_token(
        common::build_test_app(pool),
        "cambio@example.com",
        "nueva_clave_segura_456",
    )
    .await;
}

/// Changing the password with a wrong current password is a 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_requires_current(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "terco@example.com", 3).await;
    let token = login_token(
        common::build_test_app(pool.clone()),
        "terco@example.com",
        &password,
    )
    .await;

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/auth/password",
        serde_json::json!({
            "contrasena_actual": "no-es-la-actual",
            "contrasena_nueva": "nueva_clave_segura_456"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
