//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::request::Parts;

use crate::token::{AuthError, validate_access_token};

/// HMAC secret used to validate access tokens.
///
/// The router state exposes it through `FromRef` so `Identity` can be extracted.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The authenticated caller, taken from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 if the header is absent or the token does not validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AuthError;

    // Work is done synchronously so the returned future borrows neither `parts` nor `state`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)
            .and_then(|Authorization(bearer)| {
                validate_access_token(bearer.token(), secret.as_str())
            })
            .map(|info| Self {
                user_id: info.user_id,
            });

        async move { result }
    }
}
