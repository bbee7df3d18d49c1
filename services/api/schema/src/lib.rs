//! sea-orm entities for the Holocron API tables.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;
