#![allow(async_fn_in_trait)]

use crate::domain::types::{Character, Favorite, FavoriteTarget, NewUser, Planet, User};
use crate::error::ApiError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;
}

/// Repository for characters. Only the `verified` flag is writable.
pub trait CharacterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError>;
    /// Set the `verified` flag. Returns `false` if no row has this id.
    async fn set_verified(&self, id: i32, verified: bool) -> Result<bool, ApiError>;
}

/// Repository for planets. Only the `verified` flag is writable.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError>;
    /// Set the `verified` flag. Returns `false` if no row has this id.
    async fn set_verified(&self, id: i32, verified: bool) -> Result<bool, ApiError>;
}

/// Repository for favorites.
pub trait FavoriteRepository: Send + Sync {
    /// All favorites of a user, ordered by id.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, ApiError>;

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, ApiError>;

    async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, ApiError>;

    /// Delete a favorite by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Port for checking that a favorite's target row exists.
pub trait TargetLookupPort: Send + Sync {
    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, ApiError>;
}
