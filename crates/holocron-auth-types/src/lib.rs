//! Auth types shared across Holocron services.
//!
//! Provides JWT issuance/validation and the `Identity` bearer-token extractor.

pub mod identity;
pub mod token;
