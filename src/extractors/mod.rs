// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提取器模块
///
/// 每种来源类型一个提取器，输入抓取到的文档，输出零个或多个
/// 原始候选与提取错误。提取器是纯函数，不做任何I/O。
pub mod custom_url;
pub mod directory_html;
pub mod search_api;
pub mod traits;


use crate::domain::models::source::SourceKind;
use traits::Extract;

/// 按来源类型选择提取器
pub fn for_kind(kind: SourceKind) -> Box<dyn Extract> {
    match kind {
        SourceKind::DirectoryHtml => Box::new(directory_html::DirectoryHtmlExtractor),
        SourceKind::SearchApi => Box::new(search_api::SearchApiExtractor),
        SourceKind::CustomUrl => Box::new(custom_url::CustomUrlExtractor),
    }
}
