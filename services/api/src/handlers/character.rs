use axum::body::Bytes;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use holocron_auth_types::identity::Identity;

use crate::domain::types::Character;
use crate::error::ApiError;
use crate::handlers::{Envelope, IdPath, json_or_default};
use crate::state::AppState;
use crate::usecase::character::{
    GetCharacterUseCase, GetCharactersUseCase, VerifyCharacterUseCase,
};

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub rotation_period: Option<String>,
    pub height: Option<String>,
    pub skin_color: Option<String>,
    pub verified: bool,
}

impl From<Character> for CharacterResponse {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            gender: c.gender,
            hair_color: c.hair_color,
            eye_color: c.eye_color,
            birth_year: c.birth_year,
            rotation_period: c.rotation_period,
            height: c.height,
            skin_color: c.skin_color,
            verified: c.verified,
        }
    }
}

// ── GET /characters ──────────────────────────────────────────────────────────

pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let usecase = GetCharactersUseCase {
        repo: state.character_repo(),
    };
    let characters = usecase.execute().await?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

// ── GET /characters/{id} ─────────────────────────────────────────────────────

pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /characters/{id} ─────────────────────────────────────────────────────

#[derive(Default, Deserialize)]
pub struct VerifyRequest {
    pub verified: Option<bool>,
}

/// Sets `verified` to the body's value, or `true` without a body. The flag is never toggled.
pub async fn update_character(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    let body: VerifyRequest = json_or_default(&body)?;
    let verified = body.verified.unwrap_or(true);

    let usecase = VerifyCharacterUseCase {
        repo: state.character_repo(),
    };
    usecase.execute(id, verified).await?;
    tracing::info!(user_id = identity.user_id, character_id = id, verified, "character updated");
    Ok(Json(Envelope::updated("Character updated", id)))
}
