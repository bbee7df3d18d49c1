use crate::domain::password::hash_password;
use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ApiError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub password: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiError> {
        let email = input.email.trim().to_owned();
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::UserAlreadyExists);
        }
        let password_hash = hash_password(&input.password)?;
        let user = self
            .repo
            .create(&NewUser {
                email,
                password_hash,
            })
            .await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }
}

// ── GetUsers ─────────────────────────────────────────────────────────────────

pub struct GetUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}
