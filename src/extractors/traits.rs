// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::RawCandidate;
use crate::fetch::FetchedDocument;

/// 提取上下文
///
/// 相对链接与图片路径相对来源的基准URL解析
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    /// 来源展示名称
    pub source_name: &'a str,
    /// 来源基准URL
    pub base_url: &'a str,
}

/// 提取结果
///
/// 候选列表与逐片段的提取错误。单个损坏片段不中断
/// 其余片段的提取。
#[derive(Debug, Default)]
pub struct Extraction {
    pub candidates: Vec<RawCandidate>,
    pub errors: Vec<String>,
}

/// 提取器特质
pub trait Extract: Send + Sync {
    /// 从文档提取候选
    ///
    /// # 参数
    ///
    /// * `doc` - 抓取到的文档
    /// * `ctx` - 提取上下文
    ///
    /// # 返回值
    ///
    /// 候选列表与提取错误
    fn extract(&self, doc: &FetchedDocument, ctx: &SourceContext<'_>) -> Extraction;
}
