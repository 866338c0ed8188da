// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::Pricing;

/// 默认分类
pub const DEFAULT_CATEGORY: &str = "AI Assistant";

// Ordered taxonomy: the first rule whose keywords match wins. Later rules
// are weaker signals and only apply when earlier ones do not match.
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["image", "art", "design"], "Image Generation"),
    (&["code", "programming", "developer"], "Code Assistant"),
    (&["write", "content", "text"], "Content Generation"),
    (&["video", "media"], "Video"),
    (&["data", "analytics"], "Data Analysis"),
    (&["chat", "conversation"], "Chatbot"),
    (&["audio", "music", "voice"], "Audio"),
    (&["research", "science"], "Research"),
];

/// 从自由文本推断分类
///
/// 按固定顺序匹配关键词，首个命中生效，无命中取默认分类
pub fn infer_category(text: &str) -> &'static str {
    let text = text.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            return category;
        }
    }
    DEFAULT_CATEGORY
}

/// 从自由文本推断定价
///
/// 规则按序生效：free与premium/paid并存判为FREEMIUM，
/// 其次订阅关键词，再次free/开源，再次付费动词，默认FREEMIUM。
pub fn infer_pricing(text: &str) -> Pricing {
    let text = text.to_lowercase();
    if text.contains("free") && (text.contains("premium") || text.contains("paid")) {
        Pricing::Freemium
    } else if text.contains("subscription") || text.contains("monthly") || text.contains("yearly") {
        Pricing::Subscription
    } else if text.contains("free") || text.contains("open source") {
        Pricing::Free
    } else if text.contains("pay") || text.contains("buy") || text.contains("purchase") {
        Pricing::Paid
    } else {
        Pricing::Freemium
    }
}
