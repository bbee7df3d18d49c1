use crate::domain::repository::CharacterRepository;
use crate::domain::types::Character;
use crate::error::ApiError;

// ── GetCharacters ────────────────────────────────────────────────────────────

pub struct GetCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharactersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Character>, ApiError> {
        self.repo.list().await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Character, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::CharacterNotFound)
    }
}

// ── VerifyCharacter ──────────────────────────────────────────────────────────

pub struct VerifyCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> VerifyCharacterUseCase<R> {
    pub async fn execute(&self, id: i32, verified: bool) -> Result<(), ApiError> {
        if !self.repo.set_verified(id, verified).await? {
            return Err(ApiError::CharacterNotFound);
        }
        Ok(())
    }
}
