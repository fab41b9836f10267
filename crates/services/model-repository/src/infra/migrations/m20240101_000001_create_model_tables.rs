//! Migration: Create the systems, vendors and asset_categories tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Systems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Systems::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Systems::Name).string().not_null())
                    .col(ColumnDef::new(Systems::Description).text().not_null())
                    .col(ColumnDef::new(Systems::Location).json().not_null())
                    .col(ColumnDef::new(Systems::Organization).string().not_null())
                    .col(ColumnDef::new(Systems::AdditionalInformation).json().not_null())
                    .col(ColumnDef::new(Systems::Attributes).json().not_null())
                    .col(
                        ColumnDef::new(Systems::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Systems::LatestUpdateDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vendors::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Vendors::Name).string().not_null())
                    .col(ColumnDef::new(Vendors::Description).text().not_null())
                    .col(
                        ColumnDef::new(Vendors::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vendors::LatestUpdateDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AssetCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetCategories::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssetCategories::Name).string().not_null())
                    .col(ColumnDef::new(AssetCategories::Description).text().not_null())
                    .col(ColumnDef::new(AssetCategories::Parameters).json().not_null())
                    .col(
                        ColumnDef::new(AssetCategories::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetCategories::LatestUpdateDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Systems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Systems {
    Table,
    Id,
    Name,
    Description,
    Location,
    Organization,
    AdditionalInformation,
    Attributes,
    CreationDate,
    LatestUpdateDate,
}

#[derive(Iden)]
pub(super) enum Vendors {
    Table,
    Id,
    Name,
    Description,
    CreationDate,
    LatestUpdateDate,
}

#[derive(Iden)]
pub(super) enum AssetCategories {
    Table,
    Id,
    Name,
    Description,
    Parameters,
    CreationDate,
    LatestUpdateDate,
}
