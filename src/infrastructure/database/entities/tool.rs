// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: String,
    pub website_url: String,
    pub login_url: Option<String>,
    pub logo_url: Option<String>,
    pub pricing: String,
    pub features: Option<Json>,
    pub tags: Option<Json>,
    pub is_active: bool,
    pub is_featured: bool,
    pub last_scraped_at: Option<ChronoDateTimeWithTimeZone>,
    pub scraped_data: Option<Json>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
