// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create tools table
        manager
            .create_table(
                Table::create()
                    .table(Tools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tools::Name).string().not_null())
                    .col(ColumnDef::new(Tools::Slug).string().not_null())
                    .col(ColumnDef::new(Tools::Description).string().not_null())
                    .col(ColumnDef::new(Tools::LongDescription).text())
                    .col(ColumnDef::new(Tools::Category).string().not_null())
                    .col(ColumnDef::new(Tools::WebsiteUrl).string().not_null())
                    .col(ColumnDef::new(Tools::LoginUrl).string())
                    .col(ColumnDef::new(Tools::LogoUrl).string())
                    .col(ColumnDef::new(Tools::Pricing).string().not_null())
                    .col(ColumnDef::new(Tools::Features).json())
                    .col(ColumnDef::new(Tools::Tags).json())
                    .col(
                        ColumnDef::new(Tools::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tools::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Tools::LastScrapedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tools::ScrapedData).json())
                    .col(
                        ColumnDef::new(Tools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tools::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Uniqueness invariants: no two tools share a slug, a website URL or
        // an exact name. These indexes are also the serialization point for
        // concurrent near-duplicate inserts.
        manager
            .create_index(
                Index::create()
                    .name("idx_tools_slug")
                    .table(Tools::Table)
                    .col(Tools::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tools_website_url")
                    .table(Tools::Table)
                    .col(Tools::WebsiteUrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tools_name")
                    .table(Tools::Table)
                    .col(Tools::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tools_is_active")
                    .table(Tools::Table)
                    .col(Tools::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tools::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tools {
    Table,
    Id,
    Name,
    Slug,
    Description,
    LongDescription,
    Category,
    WebsiteUrl,
    LoginUrl,
    LogoUrl,
    Pricing,
    Features,
    Tags,
    IsActive,
    IsFeatured,
    LastScrapedAt,
    ScrapedData,
    CreatedAt,
    UpdatedAt,
}
