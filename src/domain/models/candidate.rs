// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 原始候选记录
///
/// 提取器的输出，字段均为自由文本，仅在单次运行内存在。
/// 缺少必填字段的候选会在规范化阶段被丢弃。
#[derive(Debug, Clone, Default)]
pub struct RawCandidate {
    /// 工具名称
    pub name: Option<String>,
    /// 简介
    pub description: Option<String>,
    /// 详细介绍
    pub long_description: Option<String>,
    /// 官网URL
    pub website_url: Option<String>,
    /// 登录URL
    pub login_url: Option<String>,
    /// Logo URL
    pub logo_url: Option<String>,
    /// 分类相关文本（徽标、标签等）
    pub category_text: Option<String>,
    /// 定价相关文本
    pub pricing_text: Option<String>,
    /// 明确已知的定价（来源直接给出时优先于文本推断）
    pub pricing: Option<Pricing>,
    /// 功能列表
    pub features: Vec<String>,
    /// 标签列表
    pub tags: Vec<String>,
}

/// 定价模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pricing {
    /// 免费
    Free,
    /// 免费+付费增值
    Freemium,
    /// 付费
    Paid,
    /// 订阅制
    Subscription,
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing::Freemium
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Pricing::Free => "FREE",
            Pricing::Freemium => "FREEMIUM",
            Pricing::Paid => "PAID",
            Pricing::Subscription => "SUBSCRIPTION",
        };
        write!(f, "{}", s)
    }
}

impl Pricing {
    /// 从数据库字符串解析定价，未知取默认值
    pub fn parse(s: &str) -> Pricing {
        match s {
            "FREE" => Pricing::Free,
            "PAID" => Pricing::Paid,
            "SUBSCRIPTION" => Pricing::Subscription,
            _ => Pricing::Freemium,
        }
    }
}

/// 规范化工具候选
///
/// 规范化后的候选记录，slug 由名称确定性推导，
/// 同名工具在任意运行中都得到相同的身份键。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCandidate {
    /// 工具名称，非空
    pub name: String,
    /// URL安全的唯一键，由名称推导
    pub slug: String,
    /// 简介，截断至固定长度
    pub description: String,
    /// 详细介绍
    pub long_description: Option<String>,
    /// 分类，取自固定类目或默认值
    pub category: String,
    /// 官网URL，绝对地址，必填
    pub website_url: String,
    /// 登录URL
    pub login_url: Option<String>,
    /// Logo URL
    pub logo_url: Option<String>,
    /// 定价模式
    pub pricing: Pricing,
    /// 功能列表，未知时为空数组
    pub features: Vec<String>,
    /// 标签列表，未知时为空数组
    pub tags: Vec<String>,
    /// 来源名称
    pub source_name: String,
}
