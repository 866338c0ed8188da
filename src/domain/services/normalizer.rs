// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::{RawCandidate, ToolCandidate};
use crate::domain::services::classifier;

/// 简介的最大长度（字符数）
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// 名称的最小长度，低于该长度视为垃圾匹配
const MIN_NAME_LEN: usize = 2;

/// 由名称确定性推导slug
///
/// 小写化，连续的非字母数字字符折叠为单个连字符，去除首尾连字符。
/// 同一名称在任意调用与任意运行中都产生相同的slug。
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// 按字符数截断文本
fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// 规范化原始候选
///
/// 纯转换，无网络与数据库访问。缺少名称、简介或官网URL的
/// 候选返回 `None`，垃圾匹配不得进入目录。
pub fn normalize(raw: RawCandidate, source_name: &str) -> Option<ToolCandidate> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| n.chars().count() >= MIN_NAME_LEN)?
        .to_string();
    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())?
        .to_string();
    let website_url = raw
        .website_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())?
        .to_string();

    let slug = slugify(&name);
    if slug.is_empty() {
        return None;
    }

    let combined = format!("{} {}", name, description);
    let category = raw
        .category_text
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| classifier::infer_category(&combined).to_string());
    let pricing = raw.pricing.unwrap_or_else(|| {
        classifier::infer_pricing(raw.pricing_text.as_deref().unwrap_or(&combined))
    });

    let long_description = raw.long_description.or_else(|| Some(description.clone()));

    Some(ToolCandidate {
        name,
        slug,
        description: truncate(&description, MAX_DESCRIPTION_LEN),
        long_description,
        category,
        website_url,
        login_url: raw.login_url,
        logo_url: raw.logo_url,
        pricing,
        features: raw.features,
        tags: raw.tags,
        source_name: source_name.to_string(),
    })
}
