// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::RawCandidate;
use crate::extractors::traits::{Extract, Extraction, SourceContext};
use crate::fetch::FetchedDocument;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// 单页最多处理的卡片数
const MAX_CARDS: usize = 50;

// Directory pages repeat "card-like" structures: a heading, a snippet,
// a link and an image in close locality. These selectors cover the
// class-name conventions the supported directories use.
static CARD: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"article, [class*="tool"], [class*="card"], [class*="item"], a[href*="/tool/"]"#)
        .expect("card selector")
});
static HEADING: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"h2, h3, h4, [class*="title"], [class*="name"]"#).expect("heading selector")
});
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("anchor selector"));
static ABSOLUTE_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href^="http"]"#).expect("absolute anchor selector"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"p, [class*="description"], [class*="excerpt"]"#).expect("paragraph selector")
});
static DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div").expect("div selector"));
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("image selector"));
static BADGE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[class*="category"], [class*="tag"]"#).expect("badge selector")
});

type TextStrategy = fn(ElementRef<'_>) -> Option<String>;
type UrlStrategy = fn(ElementRef<'_>, &Url) -> Option<String>;

// Per-field strategy lists, tried in order until one yields a non-empty
// value. Keeping each strategy a named function keeps the heuristic
// auditable and testable in isolation.
const NAME_STRATEGIES: &[TextStrategy] = &[name_from_heading, name_from_first_anchor];
const DESCRIPTION_STRATEGIES: &[TextStrategy] =
    &[description_from_paragraph, description_from_first_div];
const WEBSITE_STRATEGIES: &[UrlStrategy] = &[
    website_from_absolute_anchor,
    website_from_own_href,
    website_from_relative_href,
];

fn element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn name_from_heading(card: ElementRef<'_>) -> Option<String> {
    card.select(&HEADING).next().map(element_text)
}

fn name_from_first_anchor(card: ElementRef<'_>) -> Option<String> {
    card.select(&ANCHOR).next().map(element_text)
}

fn description_from_paragraph(card: ElementRef<'_>) -> Option<String> {
    card.select(&PARAGRAPH).next().map(element_text)
}

fn description_from_first_div(card: ElementRef<'_>) -> Option<String> {
    card.select(&DIV).next().map(element_text)
}

fn website_from_absolute_anchor(card: ElementRef<'_>, _base: &Url) -> Option<String> {
    card.select(&ABSOLUTE_ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

fn website_from_own_href(card: ElementRef<'_>, _base: &Url) -> Option<String> {
    card.value()
        .attr("href")
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
}

fn website_from_relative_href(card: ElementRef<'_>, base: &Url) -> Option<String> {
    let href = card
        .value()
        .attr("href")
        .or_else(|| card.select(&ANCHOR).next().and_then(|a| a.value().attr("href")))?;
    resolve(base, href)
}

/// 相对路径相对基准URL解析为绝对地址
fn resolve(base: &Url, href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    base.join(href).ok().map(|u| u.to_string())
}

fn first_text(card: ElementRef<'_>, strategies: &[TextStrategy]) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy(card).filter(|v| !v.is_empty()))
}

fn first_url(card: ElementRef<'_>, base: &Url, strategies: &[UrlStrategy]) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy(card, base).filter(|v| !v.is_empty()))
}

/// 从单张卡片提取候选
///
/// 名称、简介或链接缺失的卡片被丢弃而非发出——
/// 残缺匹配不得进入目录。
fn extract_card(card: ElementRef<'_>, base: &Url) -> Option<RawCandidate> {
    let name = first_text(card, NAME_STRATEGIES)?;
    if name.chars().count() < 2 {
        return None;
    }
    let description = first_text(card, DESCRIPTION_STRATEGIES)?;
    let website_url = first_url(card, base, WEBSITE_STRATEGIES)?;

    let logo_url = card
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(|src| resolve(base, src));
    let category = card
        .select(&BADGE)
        .next()
        .map(element_text)
        .filter(|c| !c.is_empty());

    let mut tags: Vec<String> = category.iter().cloned().collect();
    tags.push("AI".to_string());

    Some(RawCandidate {
        name: Some(name),
        description: Some(description),
        website_url: Some(website_url),
        logo_url,
        category_text: category,
        tags,
        ..Default::default()
    })
}

/// 目录HTML提取器
///
/// 扫描文档中重复出现的卡片结构，每个匹配视为一个候选
pub struct DirectoryHtmlExtractor;

impl Extract for DirectoryHtmlExtractor {
    fn extract(&self, doc: &FetchedDocument, ctx: &SourceContext<'_>) -> Extraction {
        let mut extraction = Extraction::default();

        let base = match Url::parse(ctx.base_url) {
            Ok(base) => base,
            Err(e) => {
                extraction
                    .errors
                    .push(format!("Invalid base URL {}: {}", ctx.base_url, e));
                return extraction;
            }
        };

        let document = Html::parse_document(&doc.body);
        // Wrapper elements can match the card selector too and yield a
        // duplicate built from their first nested card. First occurrence
        // of a name wins.
        let mut seen = HashSet::new();
        for card in document.select(&CARD).take(MAX_CARDS) {
            if let Some(candidate) = extract_card(card, &base) {
                let name = candidate.name.clone().unwrap_or_default();
                if seen.insert(name) {
                    extraction.candidates.push(candidate);
                }
            }
        }

        extraction
    }
}
