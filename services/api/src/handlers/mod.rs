use axum::extract::FromRequestParts;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod token;
pub mod user;

/// Integer `{id}` path segment; anything else is a 400 with the JSON error envelope.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath(pub i32);

/// Success envelope for mutations: `{"msg": ..., "<kind>_id": id}`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub msg: &'static str,
    #[serde(flatten)]
    pub id: EnvelopeId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeId {
    InsertedId(i32),
    EliminatedId(i32),
    UpdatedId(i32),
}

impl Envelope {
    pub fn inserted(msg: &'static str, id: i32) -> Self {
        Self {
            msg,
            id: EnvelopeId::InsertedId(id),
        }
    }

    pub fn eliminated(msg: &'static str, id: i32) -> Self {
        Self {
            msg,
            id: EnvelopeId::EliminatedId(id),
        }
    }

    pub fn updated(msg: &'static str, id: i32) -> Self {
        Self {
            msg,
            id: EnvelopeId::UpdatedId(id),
        }
    }
}

/// Parse a JSON request body, treating an empty body as `T::default()`.
///
/// Content type is not checked; presence of required fields is left to the caller.
pub fn json_or_default<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}
