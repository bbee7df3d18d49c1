//! Cross-cutting pieces shared by Holocron services: error envelope, health probes,
//! request-id middleware, tracing setup and env-based configuration.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
