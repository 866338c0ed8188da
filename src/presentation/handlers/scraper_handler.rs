// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Query},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use url::Url;

use crate::{
    application::dto::{custom_scrape_request::CustomScrapeRequest, run_summary::RunSummary},
    domain::models::scraper_result::TriggeredBy,
    domain::repositories::scraper_log_repository::ScraperLogRepository,
    presentation::errors::AppError,
    scheduler::recheck::CatalogRechecker,
    scheduler::runner::ScrapeRunner,
};

/// 默认返回的审计日志条数
const DEFAULT_LOG_LIMIT: u64 = 20;

/// 日志查询参数
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub limit: Option<u64>,
}

/// 手动触发全量抓取运行
pub async fn run_scraper(
    Extension(runner): Extension<Arc<ScrapeRunner>>,
) -> Result<impl IntoResponse, AppError> {
    info!("Manual scraper run requested");
    let results = runner.run_all(TriggeredBy::Manual).await?;
    Ok(Json(RunSummary::from(results)))
}

/// 定时器触发全量抓取运行
pub async fn run_scraper_cron(
    Extension(runner): Extension<Arc<ScrapeRunner>>,
) -> Result<impl IntoResponse, AppError> {
    info!("Cron scraper run requested");
    let results = runner.run_all(TriggeredBy::Cron).await?;
    Ok(Json(RunSummary::from(results)))
}

/// 抓取手工提交的单个URL
pub async fn scrape_custom_url(
    Extension(runner): Extension<Arc<ScrapeRunner>>,
    Json(payload): Json<CustomScrapeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let url = payload.url.trim();
    let parsed = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow::anyhow!("Invalid URL scheme: {}", parsed.scheme()).into());
    }

    let result = runner.run_custom_url(url).await?;
    Ok(Json(result))
}

/// 巡检目录中激活条目的官网可达性
pub async fn recheck_catalog(
    Extension(rechecker): Extension<Arc<CatalogRechecker>>,
) -> Result<impl IntoResponse, AppError> {
    let report = rechecker.recheck().await?;
    Ok(Json(report))
}

/// 列出最近的抓取审计日志
pub async fn list_logs(
    Extension(logs): Extension<Arc<dyn ScraperLogRepository>>,
    Query(query): Query<LogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT);
    let entries = logs.list_recent(limit).await?;
    Ok(Json(entries))
}
