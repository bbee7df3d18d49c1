use holocron_api::domain::repository::{FavoriteRepository, UserRepository};
use holocron_api::domain::types::{FavoriteTarget, NewUser};
use holocron_api::error::ApiError;
use holocron_api::infra::db::{DbFavoriteRepository, DbUserRepository};

use crate::helpers::{TATOOINE, spawn_app};

// The use cases check for duplicates before inserting. These go straight to the
// store, as a request losing a race against an identical one would.

#[tokio::test]
async fn should_map_duplicate_email_insert_to_conflict() {
    let app = spawn_app().await;
    let repo = DbUserRepository { db: app.db.clone() };
    let user = NewUser {
        email: "luke@tatooine.org".to_owned(),
        password_hash: "$argon2id$stub".to_owned(),
    };

    repo.create(&user).await.unwrap();
    let result = repo.create(&user).await;

    assert!(
        matches!(result, Err(ApiError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_map_duplicate_favorite_insert_to_conflict() {
    let app = spawn_app().await;
    let user = DbUserRepository { db: app.db.clone() }
        .create(&NewUser {
            email: "leia@alderaan.org".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
        })
        .await
        .unwrap();
    let repo = DbFavoriteRepository { db: app.db.clone() };

    repo.create(user.id, FavoriteTarget::Planet(TATOOINE))
        .await
        .unwrap();
    let result = repo.create(user.id, FavoriteTarget::Planet(TATOOINE)).await;

    assert!(
        matches!(result, Err(ApiError::FavoriteAlreadyExists)),
        "expected FavoriteAlreadyExists, got {result:?}"
    );
    assert_eq!(repo.list_by_user(user.id).await.unwrap().len(), 1);
}
