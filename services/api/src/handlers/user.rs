use axum::body::Bytes;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::ApiError;
use crate::handlers::{Envelope, IdPath, json_or_default};
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, GetUserUseCase, GetUsersUseCase};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "holocron_core::serde::blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "holocron_core::serde::blank_as_none")]
    pub password: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let body: CreateUserRequest = json_or_default(&body)?;
    let email = body.email.ok_or(ApiError::MissingField("email"))?;
    let password = body.password.ok_or(ApiError::MissingField("password"))?;

    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(CreateUserInput { email, password }).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::inserted("User created", user.id)),
    ))
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: Option<bool>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = GetUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}
