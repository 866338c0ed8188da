// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::fetch::Fetcher;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 巡检报告
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckReport {
    /// 巡检的条目总数
    pub checked: u32,
    /// 仍可达的条目数
    pub reachable: u32,
    /// 本次被停用的条目数
    pub deactivated: u32,
    /// 巡检过程中的错误
    pub errors: Vec<String>,
}

/// 目录健康巡检器
///
/// 对每个激活条目的官网做HEAD探测。确定不可达（非2xx响应）
/// 的条目被停用；网络层面探测失败的条目保持激活，只记录
/// 巡检信息——瞬时故障不应下架工具。
pub struct CatalogRechecker {
    catalog: Arc<dyn CatalogRepository>,
    fetcher: Arc<Fetcher>,
    timeout: Duration,
}

impl CatalogRechecker {
    /// 创建新的巡检器实例
    ///
    /// # 参数
    ///
    /// * `catalog` - 目录仓库
    /// * `fetcher` - 共享抓取器
    /// * `timeout` - 单次HEAD探测超时时间
    pub fn new(catalog: Arc<dyn CatalogRepository>, fetcher: Arc<Fetcher>, timeout: Duration) -> Self {
        Self {
            catalog,
            fetcher,
            timeout,
        }
    }

    /// 巡检全部激活条目
    ///
    /// # 返回值
    ///
    /// * `Ok(RecheckReport)` - 巡检报告
    /// * `Err(RepositoryError)` - 激活条目列表读取失败
    pub async fn recheck(&self) -> Result<RecheckReport, RepositoryError> {
        let entries = self.catalog.list_active().await?;
        info!(entries = entries.len(), "Starting catalog health check");

        let mut report = RecheckReport {
            checked: entries.len() as u32,
            reachable: 0,
            deactivated: 0,
            errors: Vec::new(),
        };

        for entry in entries {
            let now = Utc::now().to_rfc3339();
            let write = match self.fetcher.head(&entry.website_url, self.timeout).await {
                Ok(status) if (200..300).contains(&status) => {
                    report.reachable += 1;
                    self.catalog
                        .mark_checked(
                            entry.id,
                            true,
                            json!({ "status": status, "lastCheck": now }),
                        )
                        .await
                }
                Ok(status) => {
                    warn!(tool = %entry.name, status, "Website not accessible, deactivating");
                    report.deactivated += 1;
                    self.catalog
                        .mark_checked(
                            entry.id,
                            false,
                            json!({
                                "status": status,
                                "lastCheck": now,
                                "note": "Website not accessible",
                            }),
                        )
                        .await
                }
                Err(e) => {
                    report
                        .errors
                        .push(format!("Failed to check {}: {}", entry.name, e));
                    report.reachable += 1;
                    self.catalog
                        .mark_checked(
                            entry.id,
                            true,
                            json!({
                                "error": e.to_string(),
                                "lastCheck": now,
                                "note": "Failed to access website",
                            }),
                        )
                        .await
                }
            };
            if let Err(e) = write {
                report
                    .errors
                    .push(format!("Failed to record check for {}: {}", entry.name, e));
            }
        }

        info!(
            checked = report.checked,
            reachable = report.reachable,
            deactivated = report.deactivated,
            "Catalog health check finished"
        );
        Ok(report)
    }
}
