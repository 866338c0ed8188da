// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 共享API密钥，定时器与管理端携带Bearer令牌
    pub api_secret: String,
}

/// 认证中间件
///
/// 校验请求携带的Bearer令牌。仅挂载在受保护路由之上，
/// 公开端点在路由层绕过
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(StatusCode)` - 认证失败的状态码
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !auth_header.starts_with("Bearer ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..];
    if token != state.api_secret {
        warn!("Rejected request with invalid API secret");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}
