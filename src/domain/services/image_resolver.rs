// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 图标解析器特质
///
/// 外部协作者边界。给定官网URL返回可持久化的Logo地址；
/// 任何失败都返回 `None`，绝不报错——图标获取失败不得阻止
/// 工具条目的创建或更新。
#[async_trait]
pub trait ImageResolver: Send + Sync {
    async fn resolve(&self, website_url: &str) -> Option<String>;
}
