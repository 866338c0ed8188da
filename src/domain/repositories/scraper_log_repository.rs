// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraper_result::{RunStatus, ScraperResult, TriggeredBy};
use crate::domain::repositories::catalog_repository::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 审计日志保留的最大错误条数
const MAX_LOGGED_ERRORS: usize = 20;

/// 审计日志行
///
/// 定格的运行结果加上触发方式与时间戳，仅追加，不更新不删除
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperLogEntry {
    pub id: Uuid,
    pub source: String,
    pub tools_found: u32,
    pub tools_added: u32,
    pub tools_updated: u32,
    pub tools_skipped: u32,
    pub errors: Vec<String>,
    pub status: RunStatus,
    pub execution_time_ms: u64,
    pub triggered_by: TriggeredBy,
    pub created_at: DateTime<Utc>,
}

impl ScraperLogEntry {
    /// 从定格的运行结果构造审计日志行
    ///
    /// 错误列表截断到展示上限，计数保持原值
    pub fn from_result(result: &ScraperResult, triggered_by: TriggeredBy) -> Self {
        let mut errors = result.errors.clone();
        errors.truncate(MAX_LOGGED_ERRORS);
        Self {
            id: Uuid::new_v4(),
            source: result.source.clone(),
            tools_found: result.tools_found,
            tools_added: result.tools_added,
            tools_updated: result.tools_updated,
            tools_skipped: result.tools_skipped,
            errors,
            status: result.status,
            execution_time_ms: result.execution_time_ms,
            triggered_by,
            created_at: Utc::now(),
        }
    }
}

/// 审计日志仓库特质
#[async_trait]
pub trait ScraperLogRepository: Send + Sync {
    /// 追加一条审计记录
    async fn append(&self, entry: ScraperLogEntry) -> Result<(), RepositoryError>;
    /// 按创建时间倒序列出最近记录
    async fn list_recent(&self, limit: u64) -> Result<Vec<ScraperLogEntry>, RepositoryError>;
}
