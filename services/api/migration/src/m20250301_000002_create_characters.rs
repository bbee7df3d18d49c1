use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Characters::Description).string_len(250).null())
                    .col(ColumnDef::new(Characters::Gender).string_len(120).null())
                    .col(ColumnDef::new(Characters::HairColor).string_len(120).null())
                    .col(ColumnDef::new(Characters::EyeColor).string_len(120).null())
                    .col(ColumnDef::new(Characters::BirthYear).string_len(120).null())
                    .col(ColumnDef::new(Characters::RotationPeriod).string_len(120).null())
                    .col(ColumnDef::new(Characters::Height).string_len(120).null())
                    .col(ColumnDef::new(Characters::SkinColor).string_len(120).null())
                    .col(
                        ColumnDef::new(Characters::Verified)
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
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Description,
    Gender,
    HairColor,
    EyeColor,
    BirthYear,
    RotationPeriod,
    Height,
    SkinColor,
    Verified,
}
