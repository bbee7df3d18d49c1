use holocron_auth_types::token::issue_access_token;

use crate::domain::password::verify_password;
use crate::domain::repository::UserRepository;
use crate::error::ApiError;

// ── CreateToken (login) ──────────────────────────────────────────────────────

pub struct CreateTokenInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct CreateTokenOutput {
    pub user_id: i32,
    pub access_token: String,
    pub expires_in: u64,
}

pub struct CreateTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub ttl_secs: u64,
}

impl<U: UserRepository> CreateTokenUseCase<U> {
    /// Unknown email, wrong password and deactivated accounts are indistinguishable to the caller.
    pub async fn execute(&self, input: CreateTokenInput) -> Result<CreateTokenOutput, ApiError> {
        let user = self
            .users
            .find_by_email(input.email.trim())
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if user.is_active == Some(false) || !verify_password(&input.password, &user.password_hash)
        {
            return Err(ApiError::InvalidCredentials);
        }

        let (access_token, _exp) = issue_access_token(user.id, &self.jwt_secret, self.ttl_secs)
            .map_err(|e| anyhow::Error::new(e).context("issue access token"))?;

        Ok(CreateTokenOutput {
            user_id: user.id,
            access_token,
            expires_in: self.ttl_secs,
        })
    }
}
