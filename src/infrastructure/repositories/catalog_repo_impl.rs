// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::Pricing;
use crate::domain::models::catalog_entry::CatalogEntry;
use crate::domain::repositories::catalog_repository::{
    CatalogRepository, NewCatalogEntry, RepositoryError, ScrapedUpdate, ToolIdentity,
};
use crate::infrastructure::database::entities::tool;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// 目录仓库实现
///
/// 基于SeaORM实现的工具目录数据访问层
#[derive(Clone)]
pub struct CatalogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryImpl {
    /// 创建新的目录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn vec_to_json(values: &[String]) -> sea_orm::entity::prelude::Json {
    serde_json::json!(values)
}

fn json_to_vec(value: Option<sea_orm::entity::prelude::Json>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

impl From<tool::Model> for CatalogEntry {
    fn from(model: tool::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            long_description: model.long_description,
            category: model.category,
            website_url: model.website_url,
            login_url: model.login_url,
            logo_url: model.logo_url,
            pricing: Pricing::parse(&model.pricing),
            features: json_to_vec(model.features),
            tags: json_to_vec(model.tags),
            is_active: model.is_active,
            is_featured: model.is_featured,
            last_scraped_at: model.last_scraped_at.map(|t| t.with_timezone(&Utc)),
            scraped_data: model.scraped_data,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_by_identity(
        &self,
        identity: ToolIdentity<'_>,
    ) -> Result<Option<CatalogEntry>, RepositoryError> {
        // Lookup order is fixed: slug, then website URL, then name.
        // The first match wins so renamed tools still map to one row.
        let by_slug = tool::Entity::find()
            .filter(tool::Column::Slug.eq(identity.slug))
            .one(self.db.as_ref())
            .await?;
        if let Some(model) = by_slug {
            return Ok(Some(model.into()));
        }

        let by_url = tool::Entity::find()
            .filter(tool::Column::WebsiteUrl.eq(identity.website_url))
            .one(self.db.as_ref())
            .await?;
        if let Some(model) = by_url {
            return Ok(Some(model.into()));
        }

        let by_name = tool::Entity::find()
            .filter(tool::Column::Name.eq(identity.name))
            .one(self.db.as_ref())
            .await?;
        Ok(by_name.map(Into::into))
    }

    async fn create(&self, entry: NewCatalogEntry) -> Result<CatalogEntry, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let c = entry.candidate;
        let model = tool::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(c.name),
            slug: Set(c.slug),
            description: Set(c.description),
            long_description: Set(c.long_description),
            category: Set(c.category),
            website_url: Set(c.website_url),
            login_url: Set(c.login_url),
            logo_url: Set(entry.resolved_logo_url.or(c.logo_url)),
            pricing: Set(c.pricing.to_string()),
            features: Set(Some(vec_to_json(&c.features))),
            tags: Set(Some(vec_to_json(&c.tags))),
            is_active: Set(entry.is_active),
            is_featured: Set(false),
            last_scraped_at: Set(Some(now)),
            scraped_data: Set(Some(entry.scraped_data)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(self.db.as_ref()).await {
            Ok(created) => Ok(created.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(constraint)) => {
                    Err(RepositoryError::Conflict(constraint))
                }
                _ => Err(RepositoryError::Database(e)),
            },
        }
    }

    async fn update_scraped(
        &self,
        id: Uuid,
        update: ScrapedUpdate,
    ) -> Result<CatalogEntry, RepositoryError> {
        // Website URL, login URL and the activation/featured flags are
        // admin-owned and deliberately absent from this statement.
        let model = tool::ActiveModel {
            id: Unchanged(id),
            description: Set(update.description),
            long_description: Set(update.long_description),
            category: Set(update.category),
            pricing: Set(update.pricing.to_string()),
            features: Set(Some(vec_to_json(&update.features))),
            tags: Set(Some(vec_to_json(&update.tags))),
            logo_url: Set(update.logo_url),
            last_scraped_at: Set(Some(update.last_scraped_at.fixed_offset())),
            scraped_data: Set(Some(update.scraped_data)),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(RepositoryError::Database(e)),
        }
    }

    async fn list_active(&self) -> Result<Vec<CatalogEntry>, RepositoryError> {
        let models = tool::Entity::find()
            .filter(tool::Column::IsActive.eq(true))
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_checked(
        &self,
        id: Uuid,
        is_active: bool,
        scraped_data: serde_json::Value,
    ) -> Result<(), RepositoryError> {
        let model = tool::ActiveModel {
            id: Unchanged(id),
            is_active: Set(is_active),
            scraped_data: Set(Some(scraped_data)),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        match model.update(self.db.as_ref()).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(RepositoryError::Database(e)),
        }
    }
}
