//! Migration: Index names and creation dates for name lookups and paging.
//!
//! Names are business-unique by convention only, so the indexes are not unique.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_model_tables::{AssetCategories, Systems, Vendors};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_systems_name_creation_date")
                    .table(Systems::Table)
                    .col(Systems::Name)
                    .col(Systems::CreationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vendors_name_creation_date")
                    .table(Vendors::Table)
                    .col(Vendors::Name)
                    .col(Vendors::CreationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asset_categories_name_creation_date")
                    .table(AssetCategories::Table)
                    .col(AssetCategories::Name)
                    .col(AssetCategories::CreationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_asset_categories_name_creation_date")
                    .table(AssetCategories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_vendors_name_creation_date")
                    .table(Vendors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_systems_name_creation_date")
                    .table(Systems::Table)
                    .to_owned(),
            )
            .await
    }
}
