use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Planets::Name)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Planets::Description).string_len(250).null())
                    .col(ColumnDef::new(Planets::Climate).string_len(120).null())
                    .col(ColumnDef::new(Planets::Population).string_len(120).null())
                    .col(ColumnDef::new(Planets::OrbitalPeriod).string_len(120).null())
                    .col(ColumnDef::new(Planets::RotationPeriod).string_len(120).null())
                    .col(ColumnDef::new(Planets::Diameter).string_len(120).null())
                    .col(ColumnDef::new(Planets::Terrain).string_len(120).null())
                    .col(
                        ColumnDef::new(Planets::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Description,
    Climate,
    Population,
    OrbitalPeriod,
    RotationPeriod,
    Diameter,
    Terrain,
    Verified,
}
