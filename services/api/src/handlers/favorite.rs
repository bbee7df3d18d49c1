use axum::body::Bytes;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use holocron_auth_types::identity::Identity;

use crate::domain::types::{Favorite, FavoriteTarget};
use crate::error::ApiError;
use crate::handlers::{Envelope, IdPath, json_or_default};
use crate::state::AppState;
use crate::usecase::favorite::{
    CreateFavoriteUseCase, DeleteFavoriteUseCase, GetFavoritesUseCase,
};

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            character_id: f.target.character_id(),
            planet_id: f.target.planet_id(),
        }
    }
}

/// Body of the generic favorites endpoints; exactly one id must be set.
#[derive(Default, Deserialize)]
pub struct FavoriteTargetRequest {
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl FavoriteTargetRequest {
    fn into_target(self) -> Result<FavoriteTarget, ApiError> {
        FavoriteTarget::from_ids(self.character_id, self.planet_id)
    }
}

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Json<Envelope>, ApiError> {
    let usecase = CreateFavoriteUseCase {
        users: state.user_repo(),
        targets: state.target_lookup(),
        favorites: state.favorite_repo(),
    };
    let favorite = usecase.execute(user_id, target).await?;
    Ok(Json(Envelope::inserted("Favorite added", favorite.id)))
}

async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Json<Envelope>, ApiError> {
    let usecase = DeleteFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    let id = usecase.execute(user_id, target).await?;
    Ok(Json(Envelope::eliminated("Favorite eliminated", id)))
}

/// Favorites under `/users/{id}` can only be changed by that user.
fn ensure_self(identity: Identity, user_id: i32) -> Result<(), ApiError> {
    if identity.user_id != user_id {
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

// ── GET /users/{id}/favorites ────────────────────────────────────────────────

pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let usecase = GetFavoritesUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let favorites = usecase.execute(user_id).await?;
    Ok(Json(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}

// ── POST /users/{id}/favorites ───────────────────────────────────────────────

pub async fn create_user_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    ensure_self(identity, user_id)?;
    let target = json_or_default::<FavoriteTargetRequest>(&body)?.into_target()?;
    add_favorite(&state, user_id, target).await
}

// ── DELETE /users/{id}/favorites ─────────────────────────────────────────────

pub async fn delete_user_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    ensure_self(identity, user_id)?;
    let target = json_or_default::<FavoriteTargetRequest>(&body)?.into_target()?;
    remove_favorite(&state, user_id, target).await
}

// ── POST|DELETE /favorite/characters/{id} ────────────────────────────────────

pub async fn create_character_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<Json<Envelope>, ApiError> {
    add_favorite(
        &state,
        identity.user_id,
        FavoriteTarget::Character(character_id),
    )
    .await
}

pub async fn delete_character_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<Json<Envelope>, ApiError> {
    remove_favorite(
        &state,
        identity.user_id,
        FavoriteTarget::Character(character_id),
    )
    .await
}

// ── POST|DELETE /favorite/planets/{id} ───────────────────────────────────────

pub async fn create_planet_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<Json<Envelope>, ApiError> {
    add_favorite(&state, identity.user_id, FavoriteTarget::Planet(planet_id)).await
}

pub async fn delete_planet_favorite(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<Json<Envelope>, ApiError> {
    remove_favorite(&state, identity.user_id, FavoriteTarget::Planet(planet_id)).await
}
