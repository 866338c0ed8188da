// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// 无任何错误
    Success,
    /// 部分候选处理失败
    Partial,
    /// 全部候选失败或抓取本身失败
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Partial => "PARTIAL",
            RunStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}

impl RunStatus {
    /// 从数据库字符串解析状态
    pub fn parse(s: &str) -> RunStatus {
        match s {
            "SUCCESS" => RunStatus::Success,
            "PARTIAL" => RunStatus::Partial,
            _ => RunStatus::Failed,
        }
    }
}

/// 触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggeredBy {
    /// 外部定时器触发
    Cron,
    /// 管理员手动触发
    Manual,
}

impl fmt::Display for TriggeredBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriggeredBy::Cron => "CRON",
            TriggeredBy::Manual => "MANUAL",
        };
        write!(f, "{}", s)
    }
}

impl TriggeredBy {
    /// 从数据库字符串解析触发方式
    pub fn parse(s: &str) -> TriggeredBy {
        match s {
            "CRON" => TriggeredBy::Cron,
            _ => TriggeredBy::Manual,
        }
    }
}

/// 单来源运行结果
///
/// 在来源处理开始时创建，随候选处理累积计数，
/// 处理结束时定格并作为审计日志持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperResult {
    /// 来源展示名称
    pub source: String,
    /// 规范化后有效候选数
    pub tools_found: u32,
    /// 新建条目数
    pub tools_added: u32,
    /// 更新条目数
    pub tools_updated: u32,
    /// 跳过条目数（去重竞争或单候选写入失败）
    pub tools_skipped: u32,
    /// 错误信息列表
    pub errors: Vec<String>,
    /// 运行状态
    pub status: RunStatus,
    /// 执行耗时（毫秒）
    pub execution_time_ms: u64,
    /// 运行是否被取消（停止信号或截止时间）
    #[serde(skip)]
    pub cancelled: bool,
}

impl ScraperResult {
    /// 创建处理开始时的空结果
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tools_found: 0,
            tools_added: 0,
            tools_updated: 0,
            tools_skipped: 0,
            errors: Vec::new(),
            status: RunStatus::Failed,
            execution_time_ms: 0,
            cancelled: false,
        }
    }

    /// 为致命错误构造失败结果
    pub fn failed(source: &str, error: String) -> Self {
        let mut result = Self::new(source);
        result.errors.push(error);
        result
    }

    /// 标记运行被取消
    ///
    /// 取消条目不是候选错误，不参与FAILED的判定。
    pub fn mark_cancelled(&mut self, message: String) {
        self.cancelled = true;
        self.errors.push(message);
    }

    /// 定格结果
    ///
    /// 依据错误与计数计算最终状态：无错误为SUCCESS，被取消的
    /// 运行为PARTIAL，无任何成功写入为FAILED，其余为PARTIAL。
    pub fn finalize(&mut self, elapsed: Duration) {
        self.execution_time_ms = elapsed.as_millis() as u64;
        self.status = if self.errors.is_empty() {
            RunStatus::Success
        } else if self.cancelled {
            RunStatus::Partial
        } else if self.tools_added + self.tools_updated == 0 {
            RunStatus::Failed
        } else {
            RunStatus::Partial
        };
    }
}
