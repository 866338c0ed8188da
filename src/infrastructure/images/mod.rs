// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 图像模块
///
/// 提供工具Logo的多级回退解析
pub mod resolver;


pub use resolver::FaviconResolver;
