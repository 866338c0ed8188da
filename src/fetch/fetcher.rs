// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接、DNS等传输层错误）
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 超时
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// 非2xx响应
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// 抓取到的文档
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// 请求的URL
    pub url: String,
    /// HTTP状态码
    pub status: u16,
    /// Content-Type头
    pub content_type: String,
    /// 响应正文
    pub body: String,
}

// Some directories reject requests carrying a default or empty agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 抓取器
///
/// 基于reqwest的HTTP抓取边界。每次调用恰好发起一次出站请求，
/// 不在内部重试——重试属于下一次调度运行。
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    /// 创建新的抓取器实例
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(Fetcher)` - 抓取器实例
    /// * `Err(FetchError)` - 客户端构建失败
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// 抓取单个文档
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `accept` - Accept头（HTML页面与搜索API不同）
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchedDocument)` - 原始正文与状态
    /// * `Err(FetchError)` - 类型化的网络错误
    pub async fn fetch(&self, url: &str, accept: &str) -> Result<FetchedDocument, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(FetchedDocument {
            url: url.to_string(),
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    /// HEAD探测
    ///
    /// 用于目录健康巡检与图标探测，只关心可达性
    ///
    /// # 返回值
    ///
    /// * `Ok(u16)` - HTTP状态码
    /// * `Err(FetchError)` - 类型化的网络错误
    pub async fn head(&self, url: &str, timeout: Duration) -> Result<u16, FetchError> {
        let response = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(timeout)
                } else {
                    FetchError::Request(e)
                }
            })?;
        Ok(response.status().as_u16())
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(e)
        }
    }
}
