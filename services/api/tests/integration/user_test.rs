use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{register, spawn_app};

// ── POST /users ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_and_return_inserted_id() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/users")
        .json(&json!({ "email": "luke@tatooine.org", "password": "x-wing" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "msg": "User created", "inserted_id": 1 }));
}

#[tokio::test]
async fn should_require_email_and_password() {
    let app = spawn_app().await;

    let cases = [
        (json!({ "password": "x-wing" }), "email is required"),
        (json!({ "email": "   ", "password": "x-wing" }), "email is required"),
        (json!({ "email": "luke@tatooine.org" }), "password is required"),
        (json!({ "email": "luke@tatooine.org", "password": "" }), "password is required"),
    ];
    for (body, msg) in cases {
        let response = app.server.post("/users").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": msg }));
    }

    // No body at all reads as an empty object.
    let response = app.server.post("/users").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "msg": "email is required" }));
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let app = spawn_app().await;

    let response = app.server.post("/users").text("{\"email\":").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["msg"].as_str().unwrap().starts_with("invalid request body"));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let app = spawn_app().await;
    register(&app.server, "leia@alderaan.org", "first").await;

    let response = app
        .server
        .post("/users")
        .json(&json!({ "email": "leia@alderaan.org", "password": "second" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "msg": "user already exists" }));
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_users_without_password_hash() {
    let app = spawn_app().await;
    register(&app.server, "luke@tatooine.org", "x-wing").await;
    register(&app.server, "leia@alderaan.org", "buns").await;

    let response = app.server.get("/users").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": 1, "email": "luke@tatooine.org", "is_active": true },
        { "id": 2, "email": "leia@alderaan.org", "is_active": true },
    ]));
}

#[tokio::test]
async fn should_list_no_users_as_empty_array() {
    let app = spawn_app().await;
    app.server.get("/users").await.assert_json(&json!([]));
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_user_by_id() {
    let app = spawn_app().await;
    let id = register(&app.server, "han@falcon.space", "kessel").await;

    let response = app.server.get(&format!("/users/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": id, "email": "han@falcon.space", "is_active": true }));
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let app = spawn_app().await;

    let response = app.server.get("/users/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "msg": "user not found" }));
}

#[tokio::test]
async fn should_return_400_for_non_integer_id() {
    let app = spawn_app().await;

    let response = app.server.get("/users/vader").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["msg"].as_str().unwrap().starts_with("invalid path parameter"));
}
