// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::{Pricing, ToolCandidate};
use crate::domain::models::catalog_entry::CatalogEntry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束冲突（并发插入竞争）
    #[error("Unique constraint violated: {0}")]
    Conflict(String),
}

/// 工具身份键
///
/// 去重查找按 slug、官网URL、名称的固定顺序进行，首个命中生效
#[derive(Debug, Clone, Copy)]
pub struct ToolIdentity<'a> {
    pub slug: &'a str,
    pub website_url: &'a str,
    pub name: &'a str,
}

impl<'a> ToolIdentity<'a> {
    pub fn of(candidate: &'a ToolCandidate) -> Self {
        Self {
            slug: &candidate.slug,
            website_url: &candidate.website_url,
            name: &candidate.name,
        }
    }
}

/// 新建条目参数
#[derive(Debug, Clone)]
pub struct NewCatalogEntry {
    /// 规范化候选
    pub candidate: ToolCandidate,
    /// 已解析的Logo，覆盖候选自带的远端URL
    pub resolved_logo_url: Option<String>,
    /// 创建时是否激活（激活策略决定）
    pub is_active: bool,
    /// 抓取来源信息
    pub scraped_data: serde_json::Value,
}

/// 抓取更新字段集
///
/// 刻意不包含官网URL、登录URL与激活/推荐标记：
/// 后者归管理员所有，抓取更新不得覆盖。
#[derive(Debug, Clone)]
pub struct ScrapedUpdate {
    pub description: String,
    pub long_description: Option<String>,
    pub category: String,
    pub pricing: Pricing,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub logo_url: Option<String>,
    pub last_scraped_at: DateTime<Utc>,
    pub scraped_data: serde_json::Value,
}

/// 目录仓库特质
///
/// 定义工具目录数据访问接口
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 按身份键查找既有条目（slug、官网URL、名称顺序，首个命中生效）
    async fn find_by_identity(
        &self,
        identity: ToolIdentity<'_>,
    ) -> Result<Option<CatalogEntry>, RepositoryError>;
    /// 插入新条目，唯一约束冲突返回 `Conflict`
    async fn create(&self, entry: NewCatalogEntry) -> Result<CatalogEntry, RepositoryError>;
    /// 按抓取更新字段集就地更新既有条目
    async fn update_scraped(
        &self,
        id: Uuid,
        update: ScrapedUpdate,
    ) -> Result<CatalogEntry, RepositoryError>;
    /// 列出所有激活条目（健康巡检用）
    async fn list_active(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
    /// 健康巡检写回：激活状态与巡检信息
    async fn mark_checked(
        &self,
        id: Uuid,
        is_active: bool,
        scraped_data: serde_json::Value,
    ) -> Result<(), RepositoryError>;
}
