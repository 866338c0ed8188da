// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::RawCandidate;
use crate::extractors::directory_html::DirectoryHtmlExtractor;
use crate::extractors::traits::{Extract, Extraction, SourceContext};
use crate::fetch::FetchedDocument;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("title selector"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("meta description selector")
});
static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("og:title selector"));
static OG_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("og:description selector")
});
static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).expect("og:image selector"));

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

fn page_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(|t| {
            t.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|t| !t.is_empty())
        .or_else(|| meta_content(document, &OG_TITLE))
}

/// 任意URL提取器
///
/// 先套用目录卡片启发式；若无任何匹配，退化为用页面标题与
/// meta描述构造单个尽力而为的候选——手工提交的URL至多产出
/// 一个候选，而不是悄无声息地什么也不产出。
pub struct CustomUrlExtractor;

impl Extract for CustomUrlExtractor {
    fn extract(&self, doc: &FetchedDocument, ctx: &SourceContext<'_>) -> Extraction {
        let mut extraction = DirectoryHtmlExtractor.extract(doc, ctx);
        if !extraction.candidates.is_empty() {
            return extraction;
        }

        let document = Html::parse_document(&doc.body);
        let Some(title) = page_title(&document) else {
            extraction
                .errors
                .push(format!("No tool could be extracted from {}", doc.url));
            return extraction;
        };

        let description = meta_content(&document, &META_DESCRIPTION)
            .or_else(|| meta_content(&document, &OG_DESCRIPTION))
            .unwrap_or_else(|| title.clone());

        extraction.candidates.push(RawCandidate {
            name: Some(title),
            description: Some(description),
            website_url: Some(doc.url.clone()),
            logo_url: meta_content(&document, &OG_IMAGE),
            tags: vec!["AI".to_string()],
            ..Default::default()
        });

        extraction
    }
}
