use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CharacterId)
                    .name("uq_favorites_user_id_character_id")
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PlanetId)
                    .name("uq_favorites_user_id_planet_id")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_favorites_user_id_planet_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_favorites_user_id_character_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Favorites {
    Table,
    UserId,
    CharacterId,
    PlanetId,
}
