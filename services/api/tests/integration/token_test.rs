use axum::http::StatusCode;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde_json::{Value, json};

use holocron_api_schema::users;
use holocron_auth_types::token::validate_access_token;

use crate::helpers::{TEST_JWT_SECRET, TEST_TOKEN_TTL_SECS, register, spawn_app};

#[tokio::test]
async fn should_issue_bearer_token_for_valid_credentials() {
    let app = spawn_app().await;
    let id = register(&app.server, "luke@tatooine.org", "x-wing").await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "email": "luke@tatooine.org", "password": "x-wing" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], TEST_TOKEN_TTL_SECS);

    let info = validate_access_token(body["access_token"].as_str().unwrap(), TEST_JWT_SECRET)
        .unwrap();
    assert_eq!(info.user_id, id);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email_alike() {
    let app = spawn_app().await;
    register(&app.server, "luke@tatooine.org", "x-wing").await;

    for body in [
        json!({ "email": "luke@tatooine.org", "password": "tie-fighter" }),
        json!({ "email": "vader@empire.gov", "password": "x-wing" }),
    ] {
        let response = app.server.post("/token").json(&body).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&json!({ "msg": "email or password is incorrect" }));
    }
}

#[tokio::test]
async fn should_reject_deactivated_user() {
    let app = spawn_app().await;
    let id = register(&app.server, "luke@tatooine.org", "x-wing").await;

    let user = users::Entity::find_by_id(id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    let mut user: users::ActiveModel = user.into();
    user.is_active = Set(Some(false));
    user.update(&app.db).await.unwrap();

    let response = app
        .server
        .post("/token")
        .json(&json!({ "email": "luke@tatooine.org", "password": "x-wing" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_require_credentials() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "email": "luke@tatooine.org" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "msg": "password is required" }));
}
