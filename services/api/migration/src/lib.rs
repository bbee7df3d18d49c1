pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_characters;
mod m20250301_000003_create_planets;
mod m20250301_000004_create_favorites;
mod m20250301_000005_add_favorite_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_characters::Migration),
            Box::new(m20250301_000003_create_planets::Migration),
            Box::new(m20250301_000004_create_favorites::Migration),
            Box::new(m20250301_000005_add_favorite_indexes::Migration),
        ]
    }
}
