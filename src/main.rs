// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use harvestrs::config::settings::Settings;
use harvestrs::domain::models::source::Source;
use harvestrs::domain::repositories::catalog_repository::CatalogRepository;
use harvestrs::domain::repositories::scraper_log_repository::ScraperLogRepository;
use harvestrs::domain::services::image_resolver::ImageResolver;
use harvestrs::domain::services::upsert::{ActivationPolicy, UpsertEngine};
use harvestrs::fetch::Fetcher;
use harvestrs::infrastructure::database::connection;
use harvestrs::infrastructure::images::FaviconResolver;
use harvestrs::infrastructure::repositories::{CatalogRepositoryImpl, ScraperLogRepositoryImpl};
use harvestrs::presentation::middleware::auth_middleware::AuthState;
use harvestrs::presentation::routes;
use harvestrs::scheduler::{CatalogRechecker, ScrapeRunner};
use harvestrs::utils::telemetry;

use axum::Extension;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting harvestrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let fetcher = Arc::new(Fetcher::new(Duration::from_secs(settings.fetch.timeout_secs))?);
    let catalog: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let logs: Arc<dyn ScraperLogRepository> = Arc::new(ScraperLogRepositoryImpl::new(db.clone()));
    let images: Arc<dyn ImageResolver> = Arc::new(FaviconResolver::new(
        fetcher.clone(),
        Duration::from_secs(settings.fetch.image_probe_timeout_secs),
    ));

    let engine = Arc::new(UpsertEngine::new(
        catalog.clone(),
        images,
        ActivationPolicy::SCRAPED,
    ));

    let sources: Vec<Source> = Source::builtin()
        .into_iter()
        .filter(|s| !settings.scraper.disabled_sources.contains(&s.id))
        .collect();
    info!(enabled = sources.len(), "Sources configured");

    let runner = Arc::new(ScrapeRunner::new(
        sources,
        fetcher.clone(),
        engine,
        logs.clone(),
        Duration::from_secs(settings.scraper.run_deadline_secs),
    ));
    let rechecker = Arc::new(CatalogRechecker::new(
        catalog.clone(),
        fetcher.clone(),
        Duration::from_secs(settings.fetch.head_timeout_secs),
    ));

    // 5. Setup auth state
    let auth_state = AuthState {
        api_secret: settings.auth.api_secret.clone(),
    };

    // 6. Start HTTP server
    let app = routes::routes(auth_state)
        .layer(Extension(runner.clone()))
        .layer(Extension(rechecker))
        .layer(Extension(logs))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(runner))
        .await?;

    Ok(())
}

/// 等待终止信号
///
/// 收到信号后请求取消进行中的抓取运行，当前候选处理完成后停止
async fn shutdown_signal(runner: Arc<ScrapeRunner>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, cancelling any in-flight run");
    runner.cancel();
}
