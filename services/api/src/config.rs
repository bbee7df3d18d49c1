use serde::Deserialize;

use holocron_auth_types::token::ACCESS_TOKEN_EXP;
use holocron_core::config::Config;

/// API service configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct ApiConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Access-token lifetime in seconds (default 4 hours). Env var: `ACCESS_TOKEN_TTL_SECS`.
    #[serde(default = "default_access_token_ttl_secs")]
    pub access_token_ttl_secs: u64,
}

impl Config for ApiConfig {}

fn default_port() -> u16 {
    3000
}

fn default_access_token_ttl_secs() -> u64 {
    ACCESS_TOKEN_EXP
}
