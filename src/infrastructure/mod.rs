// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供数据库连接池与实体定义
pub mod database;

/// 图像模块
///
/// 提供工具Logo的多级回退解析
pub mod images;

/// 仓库实现模块
///
/// 领域仓库接口的SeaORM实现
pub mod repositories;
