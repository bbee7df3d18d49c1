use crate::error::ApiError;

/// Account record. The hash never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub is_active: Option<bool>,
}

/// Account about to be inserted; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
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

/// What a favorite points at. A favorite always has exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// Build a target from the two optional ids a client or a stored row carries.
    pub fn from_ids(
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<Self, ApiError> {
        match (character_id, planet_id) {
            (Some(id), None) => Ok(Self::Character(id)),
            (None, Some(id)) => Ok(Self::Planet(id)),
            (None, None) => Err(ApiError::MissingTarget),
            (Some(_), Some(_)) => Err(ApiError::AmbiguousTarget),
        }
    }

    pub fn character_id(self) -> Option<i32> {
        match self {
            Self::Character(id) => Some(id),
            Self::Planet(_) => None,
        }
    }

    pub fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Character(_) => None,
        }
    }

    /// Error reported when the target row does not exist.
    pub fn not_found(self) -> ApiError {
        match self {
            Self::Character(_) => ApiError::CharacterNotFound,
            Self::Planet(_) => ApiError::PlanetNotFound,
        }
    }
}

/// Association between a user and one admired character or planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}
