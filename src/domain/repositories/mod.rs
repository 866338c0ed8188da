// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域仓库模块
///
/// 定义目录与审计日志的数据访问接口
pub mod catalog_repository;
pub mod scraper_log_repository;
