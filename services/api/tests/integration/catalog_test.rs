use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{Value, json};

use crate::helpers::{ALDERAAN, LEIA, LUKE, TATOOINE, sign_up, spawn_app};

// ── Characters ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_seeded_characters() {
    let app = spawn_app().await;

    let response = app.server.get("/characters").await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["id"], LUKE);
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert_eq!(body[0]["gender"], "male");
    assert_eq!(body[0]["hair_color"], Value::Null);
    assert_eq!(body[0]["verified"], false);
    assert_eq!(body[1]["id"], LEIA);
}

#[tokio::test]
async fn should_get_character_or_404() {
    let app = spawn_app().await;

    let response = app.server.get(&format!("/characters/{LEIA}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Leia Organa");

    let response = app.server.get("/characters/99").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "msg": "character not found" }));
}

#[tokio::test]
async fn should_require_token_to_update_character() {
    let app = spawn_app().await;

    let response = app.server.put(&format!("/characters/{LUKE}")).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "msg": "unauthorized" }));
}

#[tokio::test]
async fn should_verify_character_by_default() {
    let app = spawn_app().await;
    let (_, token) = sign_up(&app.server, "luke@tatooine.org").await;

    let response = app
        .server
        .put(&format!("/characters/{LUKE}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "msg": "Character updated", "updated_id": LUKE }));

    let body: Value = app.server.get(&format!("/characters/{LUKE}")).await.json();
    assert_eq!(body["verified"], true);

    // Repeating a bodiless update sets rather than toggles.
    app.server
        .put(&format!("/characters/{LUKE}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();
    let body: Value = app.server.get(&format!("/characters/{LUKE}")).await.json();
    assert_eq!(body["verified"], true);

    let response = app
        .server
        .put(&format!("/characters/{LUKE}"))
        .authorization_bearer(&token)
        .json(&json!({ "verified": false }))
        .await;
    response.assert_status_ok();
    let body: Value = app.server.get(&format!("/characters/{LUKE}")).await.json();
    assert_eq!(body["verified"], false);
}

#[tokio::test]
async fn should_return_404_when_updating_unknown_character() {
    let app = spawn_app().await;
    let (_, token) = sign_up(&app.server, "luke@tatooine.org").await;

    let response = app
        .server
        .put("/characters/99")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "msg": "character not found" }));
}

// ── Planets ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_and_get_planets() {
    let app = spawn_app().await;

    let body: Vec<Value> = app.server.get("/planets").await.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["name"], "Tatooine");
    assert_eq!(body[1]["climate"], "temperate");

    let body: Value = app.server.get(&format!("/planets/{ALDERAAN}")).await.json();
    assert_eq!(body["name"], "Alderaan");

    let response = app.server.get("/planets/99").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "msg": "planet not found" }));
}

#[tokio::test]
async fn should_verify_planet() {
    let app = spawn_app().await;
    let (_, token) = sign_up(&app.server, "leia@alderaan.org").await;

    let response = app
        .server
        .put(&format!("/planets/{TATOOINE}"))
        .authorization_bearer(&token)
        .json(&json!({ "verified": true }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "msg": "Planet updated", "updated_id": TATOOINE }));
    let body: Value = app.server.get(&format!("/planets/{TATOOINE}")).await.json();
    assert_eq!(body["verified"], true);
}

// ── Service routes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_probes() {
    let app = spawn_app().await;
    app.server.get("/healthz").await.assert_status_ok();
    app.server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_return_json_404_for_unknown_route() {
    let app = spawn_app().await;

    let response = app.server.get("/starships").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "msg": "resource not found" }));
}

#[tokio::test]
async fn should_attach_request_id() {
    let app = spawn_app().await;

    let response = app.server.get("/characters").await;
    assert!(!response.header("x-request-id").is_empty());

    let response = app
        .server
        .get("/characters")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-me");
}
