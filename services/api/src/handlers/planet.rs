use axum::body::Bytes;
use axum::{Json, extract::State};
use serde::Serialize;

use holocron_auth_types::identity::Identity;

use crate::domain::types::Planet;
use crate::error::ApiError;
use crate::handlers::character::VerifyRequest;
use crate::handlers::{Envelope, IdPath, json_or_default};
use crate::state::AppState;
use crate::usecase::planet::{GetPlanetUseCase, GetPlanetsUseCase, VerifyPlanetUseCase};

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub orbital_period: Option<String>,
    pub rotation_period: Option<String>,
    pub diameter: Option<String>,
    pub terrain: Option<String>,
    pub verified: bool,
}

impl From<Planet> for PlanetResponse {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            climate: p.climate,
            population: p.population,
            orbital_period: p.orbital_period,
            rotation_period: p.rotation_period,
            diameter: p.diameter,
            terrain: p.terrain,
            verified: p.verified,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let usecase = GetPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PlanetResponse>, ApiError> {
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /planets/{id} ────────────────────────────────────────────────────────

/// Sets `verified` to the body's value, or `true` without a body. The flag is never toggled.
pub async fn update_planet(
    identity: Identity,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    let body: VerifyRequest = json_or_default(&body)?;
    let verified = body.verified.unwrap_or(true);

    let usecase = VerifyPlanetUseCase {
        repo: state.planet_repo(),
    };
    usecase.execute(id, verified).await?;
    tracing::info!(user_id = identity.user_id, planet_id = id, verified, "planet updated");
    Ok(Json(Envelope::updated("Planet updated", id)))
}
