// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 来源类型
///
/// 决定使用哪种提取器处理来源返回的文档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// 目录网站HTML页面
    DirectoryHtml,
    /// 结构化搜索API（JSON）
    SearchApi,
    /// 手工提交的任意URL
    CustomUrl,
}

/// 抓取来源
///
/// 静态配置的外部来源，不随运行持久化
#[derive(Debug, Clone)]
pub struct Source {
    /// 来源标识符，用于配置中禁用
    pub id: String,
    /// 来源类型
    pub kind: SourceKind,
    /// 展示名称，写入审计日志
    pub display_name: String,
    /// 抓取入口URL
    pub url: String,
}

const HTML_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

impl Source {
    /// 内置来源列表
    ///
    /// # 返回值
    ///
    /// 返回按配置顺序排列的内置来源
    pub fn builtin() -> Vec<Source> {
        vec![
            Source {
                id: "futurepedia".to_string(),
                kind: SourceKind::DirectoryHtml,
                display_name: "Futurepedia".to_string(),
                url: "https://www.futurepedia.io/ai-tools".to_string(),
            },
            Source {
                id: "aixploria".to_string(),
                kind: SourceKind::DirectoryHtml,
                display_name: "Aixploria".to_string(),
                url: "https://www.aixploria.com/en/ultimate-list-ai/".to_string(),
            },
            Source {
                id: "github-trending".to_string(),
                kind: SourceKind::SearchApi,
                display_name: "GitHub Trending AI".to_string(),
                url: "https://api.github.com/search/repositories?q=ai+tools+machine+learning&sort=stars&order=desc&per_page=20"
                    .to_string(),
            },
        ]
    }

    /// 为手工提交的URL构造临时来源
    pub fn custom(url: &str) -> Source {
        Source {
            id: "custom-url".to_string(),
            kind: SourceKind::CustomUrl,
            display_name: format!("Custom URL: {}", url),
            url: url.to_string(),
        }
    }

    /// 来源请求使用的Accept头
    pub fn accept(&self) -> &'static str {
        match self.kind {
            SourceKind::SearchApi => GITHUB_ACCEPT,
            SourceKind::DirectoryHtml | SourceKind::CustomUrl => HTML_ACCEPT,
        }
    }
}
