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
        // Append-only audit log: one row per source per run
        manager
            .create_table(
                Table::create()
                    .table(ScraperLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScraperLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScraperLogs::Source).string().not_null())
                    .col(
                        ColumnDef::new(ScraperLogs::ToolsFound)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ScraperLogs::ToolsAdded)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ScraperLogs::ToolsUpdated)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ScraperLogs::ToolsSkipped)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ScraperLogs::Errors).json())
                    .col(ColumnDef::new(ScraperLogs::Status).string().not_null())
                    .col(
                        ColumnDef::new(ScraperLogs::ExecutionTimeMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ScraperLogs::TriggeredBy).string().not_null())
                    .col(
                        ColumnDef::new(ScraperLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scraper_logs_created_at")
                    .table(ScraperLogs::Table)
                    .col(ScraperLogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScraperLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScraperLogs {
    Table,
    Id,
    Source,
    ToolsFound,
    ToolsAdded,
    ToolsUpdated,
    ToolsSkipped,
    Errors,
    Status,
    ExecutionTimeMs,
    TriggeredBy,
    CreatedAt,
}
