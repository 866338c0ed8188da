// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraper_result::{ScraperResult, TriggeredBy};
use crate::domain::models::source::Source;
use crate::domain::repositories::scraper_log_repository::{ScraperLogEntry, ScraperLogRepository};
use crate::domain::services::normalizer;
use crate::domain::services::upsert::{UpsertEngine, UpsertOutcome};
use crate::extractors::{self, traits::SourceContext};
use crate::fetch::Fetcher;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// 调度错误类型
#[derive(Error, Debug)]
pub enum RunnerError {
    /// 已有运行在进行中
    #[error("A scraper run is already in progress")]
    AlreadyRunning,
}

/// 运行标志守卫
///
/// 析构时释放运行标志。运行以任何方式结束都经过这里，
/// 包括调用方中途丢弃future，否则标志会永久卡住。
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// 抓取运行编排器
///
/// 每个来源在独立任务中处理，单来源的失败（包括panic）不波及
/// 其余来源。同一时刻最多一次运行；取消请求在当前候选处理
/// 完成后生效。
pub struct ScrapeRunner {
    sources: Vec<Source>,
    fetcher: Arc<Fetcher>,
    engine: Arc<UpsertEngine>,
    logs: Arc<dyn ScraperLogRepository>,
    run_deadline: Duration,
    running: AtomicBool,
    stop: watch::Sender<bool>,
}

impl ScrapeRunner {
    /// 创建新的编排器实例
    ///
    /// # 参数
    ///
    /// * `sources` - 启用的来源列表，结果按此顺序返回
    /// * `fetcher` - 共享抓取器
    /// * `engine` - 去重入库引擎
    /// * `logs` - 审计日志仓库
    /// * `run_deadline` - 整次运行的软截止时间
    pub fn new(
        sources: Vec<Source>,
        fetcher: Arc<Fetcher>,
        engine: Arc<UpsertEngine>,
        logs: Arc<dyn ScraperLogRepository>,
        run_deadline: Duration,
    ) -> Self {
        let (stop, _) = watch::channel(false);
        Self {
            sources,
            fetcher,
            engine,
            logs,
            run_deadline,
            running: AtomicBool::new(false),
            stop,
        }
    }

    /// 请求取消进行中的运行
    ///
    /// 取消在当前候选处理完成后生效，已完成的写入保持提交。
    pub fn cancel(&self) {
        self.stop.send_replace(true);
    }

    /// 运行全部启用来源
    ///
    /// # 参数
    ///
    /// * `triggered_by` - 触发方式，写入审计日志
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<ScraperResult>)` - 按配置顺序的各来源结果
    /// * `Err(RunnerError::AlreadyRunning)` - 已有运行在进行中
    pub async fn run_all(
        &self,
        triggered_by: TriggeredBy,
    ) -> Result<Vec<ScraperResult>, RunnerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(RunnerError::AlreadyRunning);
        }
        let _guard = RunGuard(&self.running);
        self.stop.send_replace(false);

        info!(sources = self.sources.len(), %triggered_by, "Starting scraper run");
        let deadline = Instant::now() + self.run_deadline;

        let mut handles = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let source = source.clone();
            let fetcher = Arc::clone(&self.fetcher);
            let engine = Arc::clone(&self.engine);
            let stop = self.stop.subscribe();
            handles.push((
                source.display_name.clone(),
                tokio::spawn(run_source(source, fetcher, engine, stop, deadline)),
            ));
        }

        // Join in configuration order so the response and the audit log
        // are stable across runs.
        let mut results = Vec::with_capacity(handles.len());
        for (display_name, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!(source = %display_name, error = %e, "Source task aborted");
                    let mut failed = ScraperResult::failed(
                        &display_name,
                        format!("Scraper task panicked: {}", e),
                    );
                    failed.finalize(Duration::ZERO);
                    failed
                }
            };
            self.append_audit(&result, triggered_by).await;
            results.push(result);
        }

        info!("Scraper run finished");
        Ok(results)
    }

    /// 抓取单个手工提交的URL
    ///
    /// 与完整运行共用同一互斥保护与入库管线
    pub async fn run_custom_url(&self, url: &str) -> Result<ScraperResult, RunnerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(RunnerError::AlreadyRunning);
        }
        let _guard = RunGuard(&self.running);
        self.stop.send_replace(false);

        info!(%url, "Scraping custom URL");
        let source = Source::custom(url);
        let deadline = Instant::now() + self.run_deadline;
        let result = run_source(
            source,
            Arc::clone(&self.fetcher),
            Arc::clone(&self.engine),
            self.stop.subscribe(),
            deadline,
        )
        .await;
        self.append_audit(&result, TriggeredBy::Manual).await;

        Ok(result)
    }

    /// 追加审计记录
    ///
    /// 审计失败不影响运行结果，仅记录日志
    async fn append_audit(&self, result: &ScraperResult, triggered_by: TriggeredBy) {
        let entry = ScraperLogEntry::from_result(result, triggered_by);
        if let Err(e) = self.logs.append(entry).await {
            error!(source = %result.source, error = %e, "Failed to persist audit log entry");
        }
    }
}

/// 处理单个来源
///
/// 抓取、提取、规范化、逐候选入库。候选之间检查取消与
/// 截止时间，当前候选永远处理完整。
async fn run_source(
    source: Source,
    fetcher: Arc<Fetcher>,
    engine: Arc<UpsertEngine>,
    stop: watch::Receiver<bool>,
    deadline: Instant,
) -> ScraperResult {
    let start = Instant::now();
    let mut result = ScraperResult::new(&source.display_name);

    let doc = match fetcher.fetch(&source.url, source.accept()).await {
        Ok(doc) => doc,
        Err(e) => {
            warn!(source = %source.display_name, error = %e, "Fetch failed");
            result
                .errors
                .push(format!("Failed to fetch {}: {}", source.url, e));
            result.finalize(start.elapsed());
            return result;
        }
    };

    let ctx = SourceContext {
        source_name: &source.display_name,
        base_url: &source.url,
    };
    let extraction = extractors::for_kind(source.kind).extract(&doc, &ctx);
    result.errors.extend(extraction.errors);

    let candidates: Vec<_> = extraction
        .candidates
        .into_iter()
        .filter_map(|raw| normalizer::normalize(raw, &source.display_name))
        .collect();
    result.tools_found = candidates.len() as u32;
    info!(
        source = %source.display_name,
        found = result.tools_found,
        "Extraction complete"
    );

    for candidate in &candidates {
        if *stop.borrow() || Instant::now() >= deadline {
            result.mark_cancelled(
                "Run cancelled before all candidates were processed".to_string(),
            );
            break;
        }
        match engine.upsert(candidate).await {
            Ok(UpsertOutcome::Created) => result.tools_added += 1,
            Ok(UpsertOutcome::Updated) => result.tools_updated += 1,
            Ok(UpsertOutcome::Skipped) => result.tools_skipped += 1,
            Err(e) => {
                result.tools_skipped += 1;
                result
                    .errors
                    .push(format!("Failed to process {}: {}", candidate.name, e));
            }
        }
    }

    result.finalize(start.elapsed());
    info!(
        source = %source.display_name,
        status = %result.status,
        added = result.tools_added,
        updated = result.tools_updated,
        skipped = result.tools_skipped,
        "Source processed"
    );
    result
}
