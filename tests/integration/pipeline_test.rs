// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    directory_source, search_source, test_app, DIRECTORY_PAGE,
};
use harvestrs::domain::models::candidate::Pricing;
use harvestrs::domain::models::scraper_result::{RunStatus, TriggeredBy};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 残缺卡片被静默丢弃，不影响运行状态
#[tokio::test]
async fn malformed_cards_are_dropped_without_failing_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DIRECTORY_PAGE))
        .mount(&server)
        .await;

    let t = test_app(vec![directory_source(
        "dir",
        "Directory",
        format!("{}/tools", server.uri()),
    )]);
    let results = t.runner.run_all(TriggeredBy::Cron).await.unwrap();

    let result = &results[0];
    assert_eq!(result.tools_found, 2);
    assert_eq!(result.tools_added, 2);
    assert_eq!(result.status, RunStatus::Success);
    assert!(result.errors.is_empty());
}

/// 第二次运行更新既有条目而非重复插入
#[tokio::test]
async fn second_run_updates_the_same_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DIRECTORY_PAGE))
        .mount(&server)
        .await;

    let t = test_app(vec![directory_source(
        "dir",
        "Directory",
        format!("{}/tools", server.uri()),
    )]);

    t.runner.run_all(TriggeredBy::Cron).await.unwrap();
    let second = t.runner.run_all(TriggeredBy::Cron).await.unwrap();

    assert_eq!(second[0].tools_added, 0);
    assert_eq!(second[0].tools_updated, 2);
    assert_eq!(second[0].status, RunStatus::Success);
    assert_eq!(t.catalog.entries.lock().unwrap().len(), 2);

    // One audit row per source per run
    assert_eq!(t.logs.entries.lock().unwrap().len(), 2);
}

/// 单候选写入失败产生PARTIAL状态，其余候选照常入库
#[tokio::test]
async fn store_error_on_one_candidate_yields_partial() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DIRECTORY_PAGE))
        .mount(&server)
        .await;

    let t = test_app(vec![directory_source(
        "dir",
        "Directory",
        format!("{}/tools", server.uri()),
    )]);
    *t.catalog.fail_for.lock().unwrap() = Some("Write Wizard".to_string());

    let results = t.runner.run_all(TriggeredBy::Cron).await.unwrap();
    let result = &results[0];

    assert_eq!(result.tools_added, 1);
    assert_eq!(result.tools_skipped, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Write Wizard"));
    assert_eq!(result.status, RunStatus::Partial);

    // The failing candidate never blocked the healthy one
    let entries = t.catalog.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Paint Studio");
}

/// 搜索API来源端到端：过滤、命名、定价与分类
#[tokio::test]
async fn search_source_produces_classified_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "items": [
                    {
                        "name": "ai-image-studio",
                        "description": "An AI tool for generating images",
                        "homepage": "https://imagestudio.example.com",
                        "html_url": "https://github.example.com/acme/ai-image-studio",
                        "topics": ["ai", "images"]
                    },
                    {
                        "name": "tensor-lib",
                        "description": "A linear algebra library",
                        "homepage": "",
                        "html_url": "https://github.example.com/acme/tensor-lib",
                        "topics": []
                    }
                ]
            }"#,
        ))
        .mount(&server)
        .await;

    let t = test_app(vec![search_source(
        "Code Search",
        format!("{}/search", server.uri()),
    )]);
    let results = t.runner.run_all(TriggeredBy::Cron).await.unwrap();

    assert_eq!(results[0].tools_found, 1);
    assert_eq!(results[0].tools_added, 1);

    let entries = t.catalog.entries.lock().unwrap();
    let entry = &entries[0];
    assert_eq!(entry.name, "Ai Image Studio");
    assert_eq!(entry.slug, "ai-image-studio");
    assert_eq!(entry.website_url, "https://imagestudio.example.com");
    assert_eq!(entry.pricing, Pricing::Free);
    // "image" in the description drives the category
    assert_eq!(entry.category, "Image Generation");
    assert!(entry.is_active);
    let provenance = entry.scraped_data.as_ref().unwrap();
    assert_eq!(provenance["source"], "Code Search");
}

/// 审计日志记录失败来源的错误与FAILED状态
#[tokio::test]
async fn failed_fetch_is_recorded_in_the_audit_log() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let t = test_app(vec![directory_source(
        "dir",
        "Broken Directory",
        format!("{}/tools", server.uri()),
    )]);
    t.runner.run_all(TriggeredBy::Cron).await.unwrap();

    let logs = t.logs.entries.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, RunStatus::Failed);
    assert_eq!(logs[0].tools_added, 0);
    assert_eq!(logs[0].errors.len(), 1);
    assert!(logs[0].errors[0].contains("Failed to fetch"));
}
