// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::Pricing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 目录条目
///
/// 已持久化的工具记录。slug、官网URL和名称三者均不允许重复，
/// 冲突时既有条目被就地更新而非重复插入。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 条目唯一标识符
    pub id: Uuid,
    /// 工具名称
    pub name: String,
    /// URL安全唯一键
    pub slug: String,
    /// 简介
    pub description: String,
    /// 详细介绍
    pub long_description: Option<String>,
    /// 分类
    pub category: String,
    /// 官网URL
    pub website_url: String,
    /// 登录URL，管理员维护，抓取不覆盖
    pub login_url: Option<String>,
    /// Logo URL
    pub logo_url: Option<String>,
    /// 定价模式
    pub pricing: Pricing,
    /// 功能列表
    pub features: Vec<String>,
    /// 标签列表
    pub tags: Vec<String>,
    /// 是否激活，管理员维护，抓取更新不覆盖
    pub is_active: bool,
    /// 是否推荐位，管理员维护，抓取更新不覆盖
    pub is_featured: bool,
    /// 最近一次被抓取的时间
    pub last_scraped_at: Option<DateTime<Utc>>,
    /// 抓取来源信息（provenance）
    pub scraped_data: Option<serde_json::Value>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}
