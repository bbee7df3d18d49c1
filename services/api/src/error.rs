use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use holocron_core::error::error_response;

/// API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("character_id or planet_id is required")]
    MissingTarget,
    #[error("only one of character_id or planet_id may be set")]
    AmbiguousTarget,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("email or password is incorrect")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("character not found")]
    CharacterNotFound,
    #[error("planet not found")]
    PlanetNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("favorite already exists")]
    FavoriteAlreadyExists,
    /// Displays only the outermost context (the failed operation); the full chain is logged.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::MissingTarget
            | Self::AmbiguousTarget
            | Self::InvalidBody(_)
            | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::CharacterNotFound
            | Self::PlanetNotFound
            | Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::FavoriteAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidBody(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), "internal error");
        }
        error_response(self.status(), self.to_string())
    }
}
