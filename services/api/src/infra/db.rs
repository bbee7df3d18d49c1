use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, sea_query::Expr,
};

use holocron_api_schema::{characters, favorites, planets, users};

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, TargetLookupPort, UserRepository,
};
use crate::domain::types::{Character, Favorite, FavoriteTarget, NewUser, Planet, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_active: Set(Some(true)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_violation_as(e, ApiError::UserAlreadyExists, "create user"))?;
        Ok(user_from_model(model))
    }
}

/// Maps a unique-index rejection to `conflict`; any other failure is internal.
fn unique_violation_as(e: DbErr, conflict: ApiError, op: &'static str) -> ApiError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => anyhow::Error::new(e).context(op).into(),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        is_active: model.is_active,
    }
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn list(&self) -> Result<Vec<Character>, ApiError> {
        let models = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.db)
            .await
            .context("list characters")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn set_verified(&self, id: i32, verified: bool) -> Result<bool, ApiError> {
        let result = characters::Entity::update_many()
            .col_expr(characters::Column::Verified, Expr::value(verified))
            .filter(characters::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update character verified")?;
        Ok(result.rows_affected > 0)
    }
}

fn character_from_model(model: characters::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
        description: model.description,
        gender: model.gender,
        hair_color: model.hair_color,
        eye_color: model.eye_color,
        birth_year: model.birth_year,
        rotation_period: model.rotation_period,
        height: model.height,
        skin_color: model.skin_color,
        verified: model.verified,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, ApiError> {
        let models = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn set_verified(&self, id: i32, verified: bool) -> Result<bool, ApiError> {
        let result = planets::Entity::update_many()
            .col_expr(planets::Column::Verified, Expr::value(verified))
            .filter(planets::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update planet verified")?;
        Ok(result.rows_affected > 0)
    }
}

fn planet_from_model(model: planets::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        description: model.description,
        climate: model.climate,
        population: model.population,
        orbital_period: model.orbital_period,
        rotation_period: model.rotation_period,
        diameter: model.diameter,
        terrain: model.terrain,
        verified: model.verified,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, ApiError> {
        let models = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .order_by_asc(favorites::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites by user")?;
        models.into_iter().map(favorite_from_model).collect()
    }

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, ApiError> {
        let target_filter = match target {
            FavoriteTarget::Character(id) => favorites::Column::CharacterId.eq(id),
            FavoriteTarget::Planet(id) => favorites::Column::PlanetId.eq(id),
        };
        let model = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(target_filter)
            .one(&self.db)
            .await
            .context("find favorite")?;
        model.map(favorite_from_model).transpose()
    }

    async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, ApiError> {
        let model = favorites::ActiveModel {
            user_id: Set(user_id),
            character_id: Set(target.character_id()),
            planet_id: Set(target.planet_id()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_violation_as(e, ApiError::FavoriteAlreadyExists, "insert favorite"))?;
        favorite_from_model(model)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = favorites::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }
}

/// A stored row with zero or two targets breaks the schema's CHECK constraint;
/// surface it as an internal error rather than a client error.
fn favorite_from_model(model: favorites::Model) -> Result<Favorite, ApiError> {
    let target = FavoriteTarget::from_ids(model.character_id, model.planet_id).map_err(|_| {
        anyhow::anyhow!("favorite {} does not reference exactly one target", model.id)
    })?;
    Ok(Favorite {
        id: model.id,
        user_id: model.user_id,
        target,
    })
}

// ── Target lookup ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTargetLookup {
    pub db: DatabaseConnection,
}

impl TargetLookupPort for DbTargetLookup {
    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, ApiError> {
        let count = match target {
            FavoriteTarget::Character(id) => characters::Entity::find_by_id(id)
                .count(&self.db)
                .await
                .context("count character by id")?,
            FavoriteTarget::Planet(id) => planets::Entity::find_by_id(id)
                .count(&self.db)
                .await
                .context("count planet by id")?,
        };
        Ok(count > 0)
    }
}
