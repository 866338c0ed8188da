// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 手工提交URL请求
#[derive(Debug, Deserialize)]
pub struct CustomScrapeRequest {
    /// 待抓取的页面URL
    pub url: String,
}
