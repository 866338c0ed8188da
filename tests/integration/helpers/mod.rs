// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum::Router;
use harvestrs::domain::models::catalog_entry::CatalogEntry;
use harvestrs::domain::models::source::{Source, SourceKind};
use harvestrs::domain::repositories::catalog_repository::{
    CatalogRepository, NewCatalogEntry, RepositoryError, ScrapedUpdate, ToolIdentity,
};
use harvestrs::domain::repositories::scraper_log_repository::{
    ScraperLogEntry, ScraperLogRepository,
};
use harvestrs::domain::services::image_resolver::ImageResolver;
use harvestrs::domain::services::upsert::{ActivationPolicy, UpsertEngine};
use harvestrs::fetch::Fetcher;
use harvestrs::presentation::middleware::auth_middleware::AuthState;
use harvestrs::presentation::routes;
use harvestrs::scheduler::{CatalogRechecker, ScrapeRunner};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub const API_SECRET: &str = "test-secret";

/// 两张有效卡片加一张缺链接的残缺卡片
pub const DIRECTORY_PAGE: &str = r#"
    <html><body>
    <article class="tool-card">
      <h3>Paint Studio</h3>
      <p>AI image generation with advanced controls</p>
      <a href="https://paint.example.com">Visit</a>
    </article>
    <article class="tool-card">
      <h3>Write Wizard</h3>
      <p>Generate long-form content in seconds</p>
      <a href="https://wizard.example.com">Details</a>
    </article>
    <article class="tool-card">
      <h3>Broken Card</h3>
      <p>This fragment has no link at all</p>
    </article>
    </body></html>
"#;

/// 内存目录仓库
///
/// `fail_for` 指定的工具名在写入时返回数据库错误，
/// 用于构造部分失败场景。
#[derive(Default)]
pub struct InMemoryCatalog {
    pub entries: Mutex<Vec<CatalogEntry>>,
    pub fail_for: Mutex<Option<String>>,
}

impl InMemoryCatalog {
    fn should_fail(&self, name: &str) -> bool {
        self.fail_for
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|n| n == name)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_by_identity(
        &self,
        identity: ToolIdentity<'_>,
    ) -> Result<Option<CatalogEntry>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        let by_slug = entries.iter().find(|e| e.slug == identity.slug);
        let by_url = entries.iter().find(|e| e.website_url == identity.website_url);
        let by_name = entries.iter().find(|e| e.name == identity.name);
        Ok(by_slug.or(by_url).or(by_name).cloned())
    }

    async fn create(&self, entry: NewCatalogEntry) -> Result<CatalogEntry, RepositoryError> {
        if self.should_fail(&entry.candidate.name) {
            return Err(RepositoryError::Database(DbErr::Custom(
                "connection reset".to_string(),
            )));
        }
        let now = Utc::now();
        let c = entry.candidate;
        let created = CatalogEntry {
            id: Uuid::new_v4(),
            name: c.name,
            slug: c.slug,
            description: c.description,
            long_description: c.long_description,
            category: c.category,
            website_url: c.website_url,
            login_url: c.login_url,
            logo_url: entry.resolved_logo_url.or(c.logo_url),
            pricing: c.pricing,
            features: c.features,
            tags: c.tags,
            is_active: entry.is_active,
            is_featured: false,
            last_scraped_at: Some(now),
            scraped_data: Some(entry.scraped_data),
            created_at: now,
            updated_at: now,
        };
        self.entries.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_scraped(
        &self,
        id: Uuid,
        update: ScrapedUpdate,
    ) -> Result<CatalogEntry, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if self
            .fail_for
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|n| n == entry.name)
        {
            return Err(RepositoryError::Database(DbErr::Custom(
                "connection reset".to_string(),
            )));
        }
        entry.description = update.description;
        entry.long_description = update.long_description;
        entry.category = update.category;
        entry.pricing = update.pricing;
        entry.features = update.features;
        entry.tags = update.tags;
        entry.logo_url = update.logo_url;
        entry.last_scraped_at = Some(update.last_scraped_at);
        entry.scraped_data = Some(update.scraped_data);
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn list_active(&self) -> Result<Vec<CatalogEntry>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().filter(|e| e.is_active).cloned().collect())
    }

    async fn mark_checked(
        &self,
        id: Uuid,
        is_active: bool,
        scraped_data: serde_json::Value,
    ) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepositoryError::NotFound)?;
        entry.is_active = is_active;
        entry.scraped_data = Some(scraped_data);
        Ok(())
    }
}

/// 内存审计日志仓库
#[derive(Default)]
pub struct InMemoryLogs {
    pub entries: Mutex<Vec<ScraperLogEntry>>,
}

#[async_trait]
impl ScraperLogRepository for InMemoryLogs {
    async fn append(&self, entry: ScraperLogEntry) -> Result<(), RepositoryError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<ScraperLogEntry>, RepositoryError> {
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

pub struct NoLogo;

#[async_trait]
impl ImageResolver for NoLogo {
    async fn resolve(&self, _website_url: &str) -> Option<String> {
        None
    }
}

pub fn directory_source(id: &str, name: &str, url: String) -> Source {
    Source {
        id: id.to_string(),
        kind: SourceKind::DirectoryHtml,
        display_name: name.to_string(),
        url,
    }
}

pub fn search_source(name: &str, url: String) -> Source {
    Source {
        id: "search".to_string(),
        kind: SourceKind::SearchApi,
        display_name: name.to_string(),
        url,
    }
}

pub struct TestApp {
    pub app: Router,
    pub catalog: Arc<InMemoryCatalog>,
    pub logs: Arc<InMemoryLogs>,
    pub runner: Arc<ScrapeRunner>,
}

/// 组装带内存仓库的完整应用
pub fn test_app(sources: Vec<Source>) -> TestApp {
    let catalog = Arc::new(InMemoryCatalog::default());
    let logs = Arc::new(InMemoryLogs::default());
    let fetcher = Arc::new(Fetcher::new(Duration::from_secs(5)).unwrap());

    let catalog_dyn: Arc<dyn CatalogRepository> = catalog.clone();
    let logs_dyn: Arc<dyn ScraperLogRepository> = logs.clone();

    let engine = Arc::new(UpsertEngine::new(
        catalog_dyn.clone(),
        Arc::new(NoLogo),
        ActivationPolicy::SCRAPED,
    ));
    let runner = Arc::new(ScrapeRunner::new(
        sources,
        fetcher.clone(),
        engine,
        logs_dyn.clone(),
        Duration::from_secs(60),
    ));
    let rechecker = Arc::new(CatalogRechecker::new(
        catalog_dyn,
        fetcher,
        Duration::from_secs(2),
    ));

    let auth_state = AuthState {
        api_secret: API_SECRET.to_string(),
    };
    let app = routes::routes(auth_state)
        .layer(Extension(runner.clone()))
        .layer(Extension(rechecker))
        .layer(Extension(logs_dyn));

    TestApp {
        app,
        catalog,
        logs,
        runner,
    }
}
