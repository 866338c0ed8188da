// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::ToolCandidate;
use crate::domain::repositories::catalog_repository::{
    CatalogRepository, NewCatalogEntry, RepositoryError, ScrapedUpdate, ToolIdentity,
};
use crate::domain::services::image_resolver::ImageResolver;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// 入库结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 新建条目
    Created,
    /// 更新既有条目
    Updated,
    /// 跳过（并发插入竞争，条目已存在）
    Skipped,
}

/// 激活策略
///
/// 抓取入库的条目立即可用，人工提交的条目默认待审。
/// 该不对称性显式命名，避免被意外反转。
#[derive(Debug, Clone, Copy)]
pub struct ActivationPolicy {
    pub activate_on_create: bool,
}

impl ActivationPolicy {
    /// 抓取入库：创建即激活
    pub const SCRAPED: ActivationPolicy = ActivationPolicy {
        activate_on_create: true,
    };
    /// 人工提交：创建后待审
    pub const MANUAL_SUBMISSION: ActivationPolicy = ActivationPolicy {
        activate_on_create: false,
    };
}

/// 去重入库引擎
///
/// 按 slug、官网URL、名称的顺序查找既有条目，决定新建、
/// 更新或跳过，每个候选恰好产生一次写入。
pub struct UpsertEngine {
    catalog: Arc<dyn CatalogRepository>,
    images: Arc<dyn ImageResolver>,
    policy: ActivationPolicy,
}

impl UpsertEngine {
    /// 创建新的入库引擎实例
    ///
    /// # 参数
    ///
    /// * `catalog` - 目录仓库
    /// * `images` - 图标解析器
    /// * `policy` - 创建时的激活策略
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        images: Arc<dyn ImageResolver>,
        policy: ActivationPolicy,
    ) -> Self {
        Self {
            catalog,
            images,
            policy,
        }
    }

    /// 处理单个候选
    ///
    /// # 返回值
    ///
    /// * `Ok(UpsertOutcome)` - 新建、更新或跳过
    /// * `Err(RepositoryError)` - 存储错误，由调用方按候选记录
    pub async fn upsert(&self, candidate: &ToolCandidate) -> Result<UpsertOutcome, RepositoryError> {
        let existing = self
            .catalog
            .find_by_identity(ToolIdentity::of(candidate))
            .await?;

        let now = Utc::now();
        let provenance = json!({
            "source": candidate.source_name,
            "scrapedAt": now.to_rfc3339(),
        });

        // Best-effort logo resolution; a failure falls back to the remote
        // URL the extractor saw and never blocks the write.
        let resolved_logo = self.images.resolve(&candidate.website_url).await;

        match existing {
            Some(entry) => {
                self.catalog
                    .update_scraped(
                        entry.id,
                        ScrapedUpdate {
                            description: candidate.description.clone(),
                            long_description: candidate.long_description.clone(),
                            category: candidate.category.clone(),
                            pricing: candidate.pricing,
                            features: candidate.features.clone(),
                            tags: candidate.tags.clone(),
                            logo_url: resolved_logo.or_else(|| candidate.logo_url.clone()),
                            last_scraped_at: now,
                            scraped_data: provenance,
                        },
                    )
                    .await?;
                debug!(tool = %candidate.name, "Updated existing catalog entry");
                Ok(UpsertOutcome::Updated)
            }
            None => {
                let entry = NewCatalogEntry {
                    candidate: candidate.clone(),
                    resolved_logo_url: resolved_logo,
                    is_active: self.policy.activate_on_create,
                    scraped_data: provenance,
                };
                match self.catalog.create(entry).await {
                    Ok(_) => {
                        debug!(tool = %candidate.name, "Added new catalog entry");
                        Ok(UpsertOutcome::Created)
                    }
                    Err(RepositoryError::Conflict(constraint)) => {
                        // A concurrent run inserted the same identity between
                        // our lookup and the write; the row exists now.
                        debug!(tool = %candidate.name, %constraint, "Lost insert race, skipping");
                        Ok(UpsertOutcome::Skipped)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}
