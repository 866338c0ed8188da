// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraper_result::{RunStatus, TriggeredBy};
use crate::domain::repositories::catalog_repository::RepositoryError;
use crate::domain::repositories::scraper_log_repository::{ScraperLogEntry, ScraperLogRepository};
use crate::infrastructure::database::entities::scraper_log;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use std::sync::Arc;

/// 审计日志仓库实现
///
/// 基于SeaORM实现的抓取审计日志数据访问层
#[derive(Clone)]
pub struct ScraperLogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ScraperLogRepositoryImpl {
    /// 创建新的审计日志仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<scraper_log::Model> for ScraperLogEntry {
    fn from(model: scraper_log::Model) -> Self {
        Self {
            id: model.id,
            source: model.source,
            tools_found: model.tools_found.max(0) as u32,
            tools_added: model.tools_added.max(0) as u32,
            tools_updated: model.tools_updated.max(0) as u32,
            tools_skipped: model.tools_skipped.max(0) as u32,
            errors: model
                .errors
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
            status: RunStatus::parse(&model.status),
            execution_time_ms: model.execution_time_ms.max(0) as u64,
            triggered_by: TriggeredBy::parse(&model.triggered_by),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl ScraperLogRepository for ScraperLogRepositoryImpl {
    async fn append(&self, entry: ScraperLogEntry) -> Result<(), RepositoryError> {
        let model = scraper_log::ActiveModel {
            id: Set(entry.id),
            source: Set(entry.source),
            tools_found: Set(entry.tools_found as i32),
            tools_added: Set(entry.tools_added as i32),
            tools_updated: Set(entry.tools_updated as i32),
            tools_skipped: Set(entry.tools_skipped as i32),
            errors: Set(Some(serde_json::json!(entry.errors))),
            status: Set(entry.status.to_string()),
            execution_time_ms: Set(entry.execution_time_ms as i64),
            triggered_by: Set(entry.triggered_by.to_string()),
            created_at: Set(entry.created_at.fixed_offset()),
        };
        model.insert(self.db.as_ref()).await?;
        Ok(())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<ScraperLogEntry>, RepositoryError> {
        let models = scraper_log::Entity::find()
            .order_by_desc(scraper_log::Column::CreatedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
