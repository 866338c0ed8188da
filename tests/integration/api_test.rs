// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    directory_source, test_app, API_SECRET, DIRECTORY_PAGE,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::time::Duration;
use tower::util::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorized(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("Authorization", format!("Bearer {}", API_SECRET))
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 健康检查测试
///
/// 验证健康检查端点无需认证即可访问
#[tokio::test]
async fn health_check_works_without_auth() {
    let t = test_app(vec![]);

    let response = t
        .app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 未授权触发端点测试
///
/// 验证触发端点在没有认证时返回401状态码
#[tokio::test]
async fn scraper_endpoints_return_401_without_auth() {
    let t = test_app(vec![]);

    for (method, uri) in [
        ("POST", "/v1/scraper/run"),
        ("POST", "/v1/scraper/cron"),
        ("POST", "/v1/scraper/recheck"),
        ("GET", "/v1/scraper/logs"),
    ] {
        let response = t
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method(method)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn manual_run_returns_summary_and_writes_audit_log() {
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

    let response = t
        .app
        .clone()
        .oneshot(authorized("POST", "/v1/scraper/run", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary = json_body(response).await;
    assert_eq!(summary["totalSources"], 1);
    assert_eq!(summary["totalFound"], 2);
    assert_eq!(summary["totalAdded"], 2);
    assert_eq!(summary["totalErrors"], 0);
    assert_eq!(summary["results"][0]["status"], "SUCCESS");

    let response = t
        .app
        .clone()
        .oneshot(authorized("GET", "/v1/scraper/logs", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let logs = json_body(response).await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
    assert_eq!(logs[0]["source"], "Directory");
    assert_eq!(logs[0]["triggeredBy"], "MANUAL");
    assert_eq!(logs[0]["toolsAdded"], 2);
}

#[tokio::test]
async fn cron_run_is_logged_as_cron() {
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

    let response = t
        .app
        .clone()
        .oneshot(authorized("POST", "/v1/scraper/cron", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let logs = t.logs.entries.lock().unwrap();
    assert_eq!(logs[0].triggered_by.to_string(), "CRON");
}

#[tokio::test]
async fn concurrent_run_is_rejected_with_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(DIRECTORY_PAGE)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let t = test_app(vec![directory_source(
        "dir",
        "Directory",
        format!("{}/tools", server.uri()),
    )]);

    let first_app = t.app.clone();
    let first = tokio::spawn(async move {
        first_app
            .oneshot(authorized("POST", "/v1/scraper/run", Body::empty()))
            .await
            .unwrap()
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = t
        .app
        .clone()
        .oneshot(authorized("POST", "/v1/scraper/run", Body::empty()))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let first = first.await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
}

#[tokio::test]
async fn custom_url_rejects_invalid_input() {
    let t = test_app(vec![]);

    let response = t
        .app
        .clone()
        .oneshot(authorized(
            "POST",
            "/v1/scraper/custom",
            Body::from(r#"{"url": "not a url"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = t
        .app
        .clone()
        .oneshot(authorized(
            "POST",
            "/v1/scraper/custom",
            Body::from(r#"{"url": "ftp://files.example.com"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn custom_url_scrapes_the_submitted_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head>
            <title>Voice Gen</title>
            <meta name="description" content="Turn text into natural speech">
            </head><body></body></html>"#,
        ))
        .mount(&server)
        .await;

    let t = test_app(vec![]);
    let url = format!("{}/product", server.uri());
    let response = t
        .app
        .clone()
        .oneshot(authorized(
            "POST",
            "/v1/scraper/custom",
            Body::from(format!(r#"{{"url": "{}"}}"#, url)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let result = json_body(response).await;
    assert_eq!(result["source"], format!("Custom URL: {}", url));
    assert_eq!(result["toolsAdded"], 1);
    assert_eq!(result["status"], "SUCCESS");

    let entries = t.catalog.entries.lock().unwrap();
    assert_eq!(entries[0].name, "Voice Gen");
}

#[tokio::test]
async fn recheck_reports_catalog_health() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let t = test_app(vec![]);
    {
        use chrono::Utc;
        use harvestrs::domain::models::candidate::Pricing;
        use harvestrs::domain::models::catalog_entry::CatalogEntry;
        use uuid::Uuid;

        let now = Utc::now();
        t.catalog.entries.lock().unwrap().push(CatalogEntry {
            id: Uuid::new_v4(),
            name: "Dead Tool".to_string(),
            slug: "dead-tool".to_string(),
            description: "An AI tool".to_string(),
            long_description: None,
            category: "Chatbot".to_string(),
            website_url: format!("{}/gone", server.uri()),
            login_url: None,
            logo_url: None,
            pricing: Pricing::Freemium,
            features: vec![],
            tags: vec![],
            is_active: true,
            is_featured: false,
            last_scraped_at: None,
            scraped_data: None,
            created_at: now,
            updated_at: now,
        });
    }

    let response = t
        .app
        .clone()
        .oneshot(authorized("POST", "/v1/scraper/recheck", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = json_body(response).await;
    assert_eq!(report["checked"], 1);
    assert_eq!(report["deactivated"], 1);

    let entries = t.catalog.entries.lock().unwrap();
    assert!(!entries[0].is_active);
}

#[tokio::test]
async fn log_listing_honours_the_limit_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DIRECTORY_PAGE))
        .mount(&server)
        .await;

    let t = test_app(vec![
        directory_source("a", "Directory A", format!("{}/a", server.uri())),
        directory_source("b", "Directory B", format!("{}/b", server.uri())),
    ]);

    let response = t
        .app
        .clone()
        .oneshot(authorized("POST", "/v1/scraper/run", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = t
        .app
        .clone()
        .oneshot(authorized("GET", "/v1/scraper/logs?limit=1", Body::empty()))
        .await
        .unwrap();
    let logs = json_body(response).await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
}
