// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块包含系统的核心业务实体：
/// - 来源（source）：配置的外部抓取来源
/// - 候选（candidate）：提取出的原始候选与规范化后的工具候选
/// - 目录条目（catalog_entry）：持久化的工具目录记录
/// - 运行结果（scraper_result）：单来源单次运行的统计结果
pub mod candidate;
pub mod catalog_entry;
pub mod scraper_result;
pub mod source;
