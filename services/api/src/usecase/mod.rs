pub mod character;
pub mod favorite;
pub mod planet;
pub mod token;
pub mod user;
