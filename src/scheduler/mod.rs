// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 调度模块
///
/// 编排多来源抓取运行与目录健康巡检
pub mod recheck;
pub mod runner;


pub use recheck::{CatalogRechecker, RecheckReport};
pub use runner::{RunnerError, ScrapeRunner};
