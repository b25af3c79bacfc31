//! HTTP-level integration tests for the domain entity endpoints.
//!
//! Every route is role-gated, so the fixtures log in real users and
//! carry bearer tokens.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get_auth, login_token, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

/// Convenience: create an admin and return their token.
async fn admin_token(pool: &PgPool) -> String {
    let (_admin, password) = create_test_user(pool, "admin@example.com", 1).await;
    login_token(common::build_test_app(pool.clone()), "admin@example.com", &password).await
}

// ---------------------------------------------------------------------------
// Proyecto CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_proyecto_returns_201(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Análisis de suelos"}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["titulo"], "Análisis de suelos");
    assert!(json["id"].is_number());
    // Pendiente by default.
    assert_eq!(json["estado_id"], 3);
}

/// Creating without responsable_id assigns the authenticated user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_proyecto_defaults_responsable(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inv@example.com", 3).await;
    let token = login_token(
        common::build_test_app(pool.clone()),
        "inv@example.com",
        &password,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Proyecto propio"}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["responsable_id"], user.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_proyecto_by_id(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Búscame"}),
        &token,
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["titulo"], "Búscame");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_proyecto_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/proyectos/999999",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_proyecto(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Original"}),
        &token,
    )
    .await;
    let id = body_json(create_resp).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{id}"),
        serde_json::json!({"titulo": "Actualizado", "estado_id": 4}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["titulo"], "Actualizado");
    assert_eq!(json["estado_id"], 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_proyecto_returns_204(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Bórrame"}),
        &token,
    )
    .await;
    let id = body_json(create_resp).await["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_proyectos_paginated(pool: PgPool) {
    let token = admin_token(&pool).await;
    for i in 0..3 {
        post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/proyectos",
            serde_json::json!({"titulo": format!("P{i}")}),
            &token,
        )
        .await;
    }

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/proyectos?limit=2",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_elements"], 3);
}

// ---------------------------------------------------------------------------
// Project-scoped children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cronograma_scoped_crud(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Con cronograma"}),
        &token,
    )
    .await;
    let proyecto_id = body_json(create_resp).await["id"].as_i64().unwrap();

    // Create a schedule item.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{proyecto_id}/cronogramas"),
        serde_json::json!({
            "nombre": "Fase de campo",
            "fecha_inicio": "2026-09-01",
            "fecha_fin": "2026-12-15"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = body_json(response).await;
    let item_id = item["id"].as_i64().unwrap();
    assert_eq!(item["proyecto_id"], proyecto_id);

    // It is NOT reachable through another project's URL.
    let other_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Otro"}),
        &token,
    )
    .await;
    let other_id = body_json(other_resp).await["id"].as_i64().unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{other_id}/cronogramas/{item_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Reachable through its own.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{proyecto_id}/cronogramas/{item_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting the parent cascades.
    delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{proyecto_id}"),
        &token,
    )
    .await;
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{proyecto_id}/cronogramas"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An end-of-window before the start is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cronograma_rejects_inverted_dates(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "Fechas"}),
        &token,
    )
    .await;
    let proyecto_id = body_json(create_resp).await["id"].as_i64().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{proyecto_id}/cronogramas"),
        serde_json::json!({
            "nombre": "Imposible",
            "fecha_inicio": "2026-12-15",
            "fecha_fin": "2026-09-01"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Evaluations record the evaluator from the token and are write-gated
/// to evaluator roles.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_evaluacion_gate_and_author(pool: PgPool) {
    let token = admin_token(&pool).await;
    let create_resp = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/proyectos",
        serde_json::json!({"titulo": "A evaluar"}),
        &token,
    )
    .await;
    let proyecto_id = body_json(create_resp).await["id"].as_i64().unwrap();

    // An investigador may not create evaluations.
    let (_inv, inv_pw) = create_test_user(&pool, "inv@example.com", 3).await;
    let inv_token = login_token(
        common::build_test_app(pool.clone()),
        "inv@example.com",
        &inv_pw,
    )
    .await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/proyectos/{proyecto_id}/evaluaciones"),
        serde_json::json!({"concepto": "favorable"}),
        &inv_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // An evaluador interno may, and is recorded as the author.
    let (evaluador, eval_pw) = create_test_user(&pool, "eval@example.com", 4).await;
    let eval_token = login_token(
        common::build_test_app(pool.clone()),
        "eval@example.com",
        &eval_pw,
    )
    .await;
    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/proyectos/{proyecto_id}/evaluaciones"),
        serde_json::json!({"concepto": "favorable", "observaciones": "Sólido"}),
        &eval_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["evaluador_id"], evaluador.id);
}

// ---------------------------------------------------------------------------
// Reportes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reporte_approval_flow(pool: PgPool) {
    // Author: investigador. Approver: lider.
    let (autor, autor_pw) = create_test_user(&pool, "autor@example.com", 3).await;
    let (_lider, lider_pw) = create_test_user(&pool, "lider@example.com", 2).await;
    let autor_token = login_token(
        common::build_test_app(pool.clone()),
        "autor@example.com",
        &autor_pw,
    )
    .await;
    let lider_token = login_token(
        common::build_test_app(pool.clone()),
        "lider@example.com",
        &lider_pw,
    )
    .await;

    // Create.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/reportes",
        serde_json::json!({
            "titulo": "Avance trimestral",
            "tipo_reporte": "trimestral",
            "fecha_inicio": "2026-01-01T00:00:00Z",
            "fecha_fin": "2026-03-31T00:00:00Z"
        }),
        &autor_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(json["creado_por_id"], autor.id);
    assert_eq!(json["aprobado"], false);

    // The author (investigador) cannot approve.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/reportes/{id}/aprobar"),
        serde_json::json!({}),
        &autor_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A lider can.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/reportes/{id}/aprobar"),
        serde_json::json!({}),
        &lider_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["aprobado"], true);
    assert_eq!(json["estado_id"], 5);
    assert!(json["fecha_aprobacion"].is_string());

    // Approving twice conflicts.
    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/reportes/{id}/aprobar"),
        serde_json::json!({}),
        &lider_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Notificaciones
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notificaciones_are_owner_scoped(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let (dueno, dueno_pw) = create_test_user(&pool, "dueno@example.com", 3).await;
    let (_otro, otro_pw) = create_test_user(&pool, "otro@example.com", 3).await;

    // Admin sends a notification to dueño.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notificaciones",
        serde_json::json!({
            "usuario_id": dueno.id,
            "titulo": "Convocatoria abierta",
            "mensaje": "Revise la convocatoria interna 2026"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    // The owner sees it; another user does not.
    let dueno_token = login_token(
        common::build_test_app(pool.clone()),
        "dueno@example.com",
        &dueno_pw,
    )
    .await;
    let otro_token = login_token(
        common::build_test_app(pool.clone()),
        "otro@example.com",
        &otro_pw,
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notificaciones",
        &dueno_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total_elements"], 1);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notificaciones",
        &otro_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total_elements"], 0);

    // A stranger cannot mark it read.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notificaciones/{id}/leer"),
        serde_json::json!({}),
        &otro_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner can, and the unread filter empties.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notificaciones/{id}/leer"),
        serde_json::json!({}),
        &dueno_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/notificaciones?solo_no_leidas=true",
        &dueno_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total_elements"], 0);
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeded_reference_data(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/roles", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let roles = body_json(response).await;
    let nombres: Vec<&str> = roles
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(
        nombres,
        vec![
            "admin",
            "lider",
            "investigador",
            "evaluador_interno",
            "evaluador_externo"
        ]
    );

    let response = get_auth(common::build_test_app(pool), "/api/v1/estados", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let estados = body_json(response).await;
    assert_eq!(estados.as_array().unwrap().len(), 6);
    assert_eq!(estados[0]["nombre"], "Activo");
    assert_eq!(estados[4]["nombre"], "Aprobado");
}

/// Role descriptions are mutable; identity is not exposed for update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rol_descripcion(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/roles/2",
        serde_json::json!({ "descripcion": "Responsable de un grupo de investigación" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nombre"], "lider");
    assert_eq!(
        json["descripcion"],
        "Responsable de un grupo de investigación"
    );
}
