use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use holocron_auth_types::identity::JwtSecret;

use crate::infra::db::{
    DbCharacterRepository, DbFavoriteRepository, DbPlanetRepository, DbTargetLookup,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
///
/// `FromRef` lets `Identity` pick up the secret and `readyz` the connection.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    #[from_ref(skip)]
    pub access_token_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn character_repo(&self) -> DbCharacterRepository {
        DbCharacterRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn target_lookup(&self) -> DbTargetLookup {
        DbTargetLookup {
            db: self.db.clone(),
        }
    }
}
