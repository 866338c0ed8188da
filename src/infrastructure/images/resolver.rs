// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::image_resolver::ImageResolver;
use crate::fetch::Fetcher;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

// Common locations directories and product sites serve their logo from
const LOGO_PATHS: &[&str] = &[
    "/favicon.ico",
    "/favicon.png",
    "/logo.png",
    "/logo.svg",
    "/assets/logo.png",
    "/images/logo.png",
];

const GOOGLE_BASE: &str = "https://www.google.com";
const DDG_BASE: &str = "https://icons.duckduckgo.com";

/// 图标解析器
///
/// 按固定顺序探测：Google favicon服务、DuckDuckGo图标服务、
/// 站内常见Logo路径。全部探测失败时仍返回未经探测的Google
/// 地址——该服务对未知域名返回默认图标，聊胜于无。
///
/// 解析永不失败，任何错误都降级为回退地址。
pub struct FaviconResolver {
    fetcher: Arc<Fetcher>,
    probe_timeout: Duration,
    google_base: String,
    ddg_base: String,
}

impl FaviconResolver {
    /// 创建指向真实图标服务的解析器
    ///
    /// # 参数
    ///
    /// * `fetcher` - 共享抓取器
    /// * `probe_timeout` - 单次HEAD探测超时时间
    pub fn new(fetcher: Arc<Fetcher>, probe_timeout: Duration) -> Self {
        Self::with_service_bases(fetcher, probe_timeout, GOOGLE_BASE, DDG_BASE)
    }

    /// 创建使用自定义服务地址的解析器（测试用）
    pub fn with_service_bases(
        fetcher: Arc<Fetcher>,
        probe_timeout: Duration,
        google_base: &str,
        ddg_base: &str,
    ) -> Self {
        Self {
            fetcher,
            probe_timeout,
            google_base: google_base.trim_end_matches('/').to_string(),
            ddg_base: ddg_base.trim_end_matches('/').to_string(),
        }
    }

    async fn probe(&self, url: &str) -> bool {
        matches!(
            self.fetcher.head(url, self.probe_timeout).await,
            Ok(status) if (200..300).contains(&status)
        )
    }
}

#[async_trait]
impl ImageResolver for FaviconResolver {
    async fn resolve(&self, website_url: &str) -> Option<String> {
        let parsed = Url::parse(website_url).ok()?;
        let host = parsed.host_str()?.to_string();

        let google = format!("{}/s2/favicons?domain={}&sz=128", self.google_base, host);
        if self.probe(&google).await {
            return Some(google);
        }

        let ddg = format!("{}/ip3/{}.ico", self.ddg_base, host);
        if self.probe(&ddg).await {
            return Some(ddg);
        }

        for path in LOGO_PATHS {
            if let Ok(candidate) = parsed.join(path) {
                let candidate = candidate.to_string();
                if self.probe(&candidate).await {
                    return Some(candidate);
                }
            }
        }

        debug!(%host, "No probe succeeded, using unprobed favicon fallback");
        Some(google)
    }
}
