// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取模块
///
/// 管线中唯一发起出站HTTP请求的边界，所有I/O失败都在此处
/// 转换为类型化错误
pub mod fetcher;


pub use fetcher::{FetchError, FetchedDocument, Fetcher};
