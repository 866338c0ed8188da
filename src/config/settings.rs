// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、抓取、调度和认证等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 抓取运行配置
    pub scraper: ScraperSettings,
    /// 认证配置
    pub auth: AuthSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// HEAD探测超时时间（秒），用于目录健康巡检
    pub head_timeout_secs: u64,
    /// 图标探测超时时间（秒）
    pub image_probe_timeout_secs: u64,
}

/// 抓取运行配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// 单次运行的总时限（秒），超时后进行中的来源在当前候选后停止
    pub run_deadline_secs: u64,
    /// 被禁用的来源ID列表
    pub disabled_sources: Vec<String>,
}

/// 认证配置设置
#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    /// 触发接口共享密钥（管理端与外部定时器均使用）
    pub api_secret: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 2)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default fetch settings
            .set_default("fetch.timeout_secs", 30)?
            .set_default("fetch.head_timeout_secs", 5)?
            .set_default("fetch.image_probe_timeout_secs", 3)?
            // Default scraper settings
            .set_default("scraper.run_deadline_secs", 300)?
            .set_default("scraper.disabled_sources", Vec::<String>::new())?
            // Default auth settings
            .set_default("auth.api_secret", "your-secret-key")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("HARVESTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
