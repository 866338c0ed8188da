// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::scraper_handler;
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 参数
///
/// * `auth_state` - 认证状态
///
/// # 返回值
///
/// 返回配置好的路由，Extension层由调用方附加
pub fn routes(auth_state: AuthState) -> Router {
    // Health and version stay outside the auth layer
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route("/v1/scraper/run", post(scraper_handler::run_scraper))
        .route("/v1/scraper/cron", post(scraper_handler::run_scraper_cron))
        .route("/v1/scraper/custom", post(scraper_handler::scrape_custom_url))
        .route("/v1/scraper/recheck", post(scraper_handler::recheck_catalog))
        .route("/v1/scraper/logs", get(scraper_handler::list_logs))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
