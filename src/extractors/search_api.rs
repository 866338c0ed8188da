// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::{Pricing, RawCandidate};
use crate::extractors::traits::{Extract, Extraction, SourceContext};
use crate::fetch::FetchedDocument;
use serde::Deserialize;

// Repositories whose description never mentions an end-user product are
// almost always libraries or SDKs; they must not enter the catalog.
const PRODUCT_KEYWORDS: &[&str] = &["tool", "app", "platform"];

/// 搜索API响应
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RepoItem>,
}

/// 搜索结果条目
#[derive(Debug, Deserialize)]
struct RepoItem {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    html_url: String,
    #[serde(default)]
    topics: Vec<String>,
}

/// 仓库名转为展示名称："ai-code-helper" -> "Ai Code Helper"
fn title_case(repo_name: &str) -> String {
    repo_name
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 搜索API提取器
///
/// 消费关键词搜索返回的结构化JSON结果列表
pub struct SearchApiExtractor;

impl Extract for SearchApiExtractor {
    fn extract(&self, doc: &FetchedDocument, _ctx: &SourceContext<'_>) -> Extraction {
        let mut extraction = Extraction::default();

        let parsed: SearchResponse = match serde_json::from_str(&doc.body) {
            Ok(parsed) => parsed,
            Err(e) => {
                extraction
                    .errors
                    .push(format!("Unexpected search payload shape: {}", e));
                return extraction;
            }
        };

        for item in parsed.items {
            let description = match item.description {
                Some(d) if !d.trim().is_empty() => d,
                _ => continue,
            };
            let lowered = description.to_lowercase();
            if !PRODUCT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                continue;
            }

            let website_url = item
                .homepage
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(item.html_url);

            extraction.candidates.push(RawCandidate {
                name: Some(title_case(&item.name)),
                description: Some(description),
                website_url: Some(website_url),
                // Repositories surfaced by the code search are free to use
                pricing: Some(Pricing::Free),
                tags: item.topics,
                ..Default::default()
            });
        }

        extraction
    }
}
