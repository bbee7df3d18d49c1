use axum::body::Bytes;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::json_or_default;
use crate::state::AppState;
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase};

// ── POST /token ──────────────────────────────────────────────────────────────

#[derive(Default, Deserialize)]
pub struct CreateTokenRequest {
    #[serde(default, deserialize_with = "holocron_core::serde::blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "holocron_core::serde::blank_as_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

pub async fn create_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    let body: CreateTokenRequest = json_or_default(&body)?;
    let email = body.email.ok_or(ApiError::MissingField("email"))?;
    let password = body.password.ok_or(ApiError::MissingField("password"))?;

    let usecase = CreateTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
        ttl_secs: state.access_token_ttl_secs,
    };
    let output = usecase.execute(CreateTokenInput { email, password }).await?;
    Ok(Json(TokenResponse {
        access_token: output.access_token,
        token_type: "Bearer",
        expires_in: output.expires_in,
    }))
}
