use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Build the `{"msg": ...}` error envelope every Holocron endpoint returns.
pub fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    let body = serde_json::json!({ "msg": msg.into() });
    (status, axum::Json(body)).into_response()
}

/// Errors raised outside any service domain (routing, probes).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,
    #[error("service unavailable")]
    Unavailable(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        if let Self::Unavailable(ref e) = self {
            tracing::warn!(error = %e, "dependency unavailable");
        }
        error_response(status, self.to_string())
    }
}

/// Router fallback for unknown paths.
pub async fn fallback() -> AppError {
    AppError::NotFound
}
