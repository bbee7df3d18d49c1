use axum_test::TestServer;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

use holocron_api::router::build_router;
use holocron_api::state::AppState;
use holocron_api_migration::{Migrator, MigratorTrait};
use holocron_api_schema::{characters, planets};
use holocron_auth_types::identity::JwtSecret;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-only";
pub const TEST_TOKEN_TTL_SECS: u64 = 3600;

// Seeded catalog ids.
pub const LUKE: i32 = 1;
pub const LEIA: i32 = 2;
pub const TATOOINE: i32 = 1;
pub const ALDERAAN: i32 = 2;

pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
}

/// Router over a fresh in-memory SQLite database with the full schema and a small catalog.
pub async fn spawn_app() -> TestApp {
    // One connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    seed_catalog(&db).await;

    let state = AppState {
        db: db.clone(),
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        access_token_ttl_secs: TEST_TOKEN_TTL_SECS,
    };
    let server = TestServer::new(build_router(state)).unwrap();
    TestApp { server, db }
}

async fn seed_catalog(db: &DatabaseConnection) {
    for (name, gender) in [("Luke Skywalker", "male"), ("Leia Organa", "female")] {
        characters::ActiveModel {
            name: Set(name.to_owned()),
            gender: Set(Some(gender.to_owned())),
            verified: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (name, climate) in [("Tatooine", "arid"), ("Alderaan", "temperate")] {
        planets::ActiveModel {
            name: Set(name.to_owned()),
            climate: Set(Some(climate.to_owned())),
            verified: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
}

/// Register an account through the API and return its id.
pub async fn register(server: &TestServer, email: &str, password: &str) -> i32 {
    let response = server
        .post("/users")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["inserted_id"].as_i64().unwrap() as i32
}

/// Log in through the API and return the bearer token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["access_token"].as_str().unwrap().to_owned()
}

/// Register and log in; returns `(user_id, token)`.
pub async fn sign_up(server: &TestServer, email: &str) -> (i32, String) {
    let id = register(server, email, "may-the-force").await;
    let token = login(server, email, "may-the-force").await;
    (id, token)
}
