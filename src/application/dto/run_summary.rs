// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraper_result::ScraperResult;
use serde::Serialize;

/// 运行汇总响应
///
/// 跨来源的合计计数加上逐来源的明细结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_sources: u32,
    pub total_found: u32,
    pub total_added: u32,
    pub total_updated: u32,
    pub total_skipped: u32,
    pub total_errors: u32,
    pub results: Vec<ScraperResult>,
}

impl From<Vec<ScraperResult>> for RunSummary {
    fn from(results: Vec<ScraperResult>) -> Self {
        Self {
            total_sources: results.len() as u32,
            total_found: results.iter().map(|r| r.tools_found).sum(),
            total_added: results.iter().map(|r| r.tools_added).sum(),
            total_updated: results.iter().map(|r| r.tools_updated).sum(),
            total_skipped: results.iter().map(|r| r.tools_skipped).sum(),
            total_errors: results.iter().map(|r| r.errors.len() as u32).sum(),
            results,
        }
    }
}
