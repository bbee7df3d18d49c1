use crate::domain::repository::{FavoriteRepository, TargetLookupPort, UserRepository};
use crate::domain::types::{Favorite, FavoriteTarget};
use crate::error::ApiError;

// ── GetFavorites ─────────────────────────────────────────────────────────────

pub struct GetFavoritesUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> GetFavoritesUseCase<U, F> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<Favorite>, ApiError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }
        self.favorites.list_by_user(user_id).await
    }
}

// ── CreateFavorite ───────────────────────────────────────────────────────────

pub struct CreateFavoriteUseCase<U: UserRepository, T: TargetLookupPort, F: FavoriteRepository> {
    pub users: U,
    pub targets: T,
    pub favorites: F,
}

impl<U: UserRepository, T: TargetLookupPort, F: FavoriteRepository> CreateFavoriteUseCase<U, T, F> {
    pub async fn execute(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, ApiError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }
        if !self.targets.target_exists(target).await? {
            return Err(target.not_found());
        }
        if self.favorites.find(user_id, target).await?.is_some() {
            return Err(ApiError::FavoriteAlreadyExists);
        }
        let favorite = self.favorites.create(user_id, target).await?;
        tracing::info!(user_id, favorite_id = favorite.id, ?target, "favorite added");
        Ok(favorite)
    }
}

// ── DeleteFavorite ───────────────────────────────────────────────────────────

pub struct DeleteFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> DeleteFavoriteUseCase<F> {
    /// Returns the id of the removed favorite.
    pub async fn execute(&self, user_id: i32, target: FavoriteTarget) -> Result<i32, ApiError> {
        let favorite = self
            .favorites
            .find(user_id, target)
            .await?
            .ok_or(ApiError::FavoriteNotFound)?;
        // A concurrent delete may win between find and delete.
        if !self.favorites.delete(favorite.id).await? {
            return Err(ApiError::FavoriteNotFound);
        }
        tracing::info!(user_id, favorite_id = favorite.id, ?target, "favorite eliminated");
        Ok(favorite.id)
    }
}
