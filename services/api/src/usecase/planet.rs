use crate::domain::repository::PlanetRepository;
use crate::domain::types::Planet;
use crate::error::ApiError;

// ── GetPlanets ───────────────────────────────────────────────────────────────

pub struct GetPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, ApiError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Planet, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::PlanetNotFound)
    }
}

// ── VerifyPlanet ─────────────────────────────────────────────────────────────

pub struct VerifyPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> VerifyPlanetUseCase<R> {
    pub async fn execute(&self, id: i32, verified: bool) -> Result<(), ApiError> {
        if !self.repo.set_verified(id, verified).await? {
            return Err(ApiError::PlanetNotFound);
        }
        Ok(())
    }
}
