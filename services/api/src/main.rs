use sea_orm::Database;
use tracing::info;

use holocron_api::config::ApiConfig;
use holocron_api::router::build_router;
use holocron_api::state::AppState;
use holocron_auth_types::identity::JwtSecret;
use holocron_core::config::Config;
use holocron_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("info,sqlx=warn");

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
        access_token_ttl_secs: config.access_token_ttl_secs,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
