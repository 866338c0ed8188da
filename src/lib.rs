// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含对外数据传输对象（DTO）
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 提取器模块
///
/// 按来源类型实现候选工具的启发式提取
pub mod extractors;

/// 抓取模块
///
/// 负责对外部来源发起HTTP请求
pub mod fetch;

/// 基础设施模块
///
/// 提供外部服务集成，如数据库、图标解析等
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 调度模块
///
/// 实现多来源抓取的编排与目录健康巡检
pub mod scheduler;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
