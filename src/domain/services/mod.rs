// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含抓取管线的核心业务逻辑服务：
/// - 分类服务（classifier）：从自由文本推断分类与定价
/// - 规范化服务（normalizer）：原始候选到规范化候选的纯转换
/// - 入库服务（upsert）：按身份键去重并决定新建/更新/跳过
/// - 图标解析接口（image_resolver）：外部协作者边界
///
/// 领域服务不做网络请求也不直接访问数据库（入库服务通过
/// 仓库接口间接访问），保证业务规则可独立单元测试。
pub mod classifier;
pub mod image_resolver;
pub mod normalizer;
pub mod upsert;

mod normalizer_test;
