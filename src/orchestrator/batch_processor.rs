//! 批量组件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量组件的顺序处理和结果汇总。
//!
//! ## 核心功能
//!
//! 1. **上下文构建**：每次运行只构建一次项目上下文
//! 2. **顺序处理**：严格按输入顺序逐个处理，不并发
//! 3. **节流**：相邻两次 LLM 调用之间调用 `Throttle`
//! 4. **失败隔离**：单个组件失败只记录兜底结果，不中断批次
//! 5. **结果输出**：循环结束后只写一次结果文件
//!
//! ## 设计特点
//!
//! - **状态自持**：结果表和上下文都属于本次 `run`，没有全局状态
//! - **能力注入**：LLM 客户端和节流器通过泛型注入，测试时可替换

use std::time::Duration;
use tracing::{info, warn};

use crate::clients::{CompletionClient, OpenAiCompletionClient};
use crate::config::Config;
use crate::error::{AppResult, InputError};
use crate::infrastructure::{FixedDelayThrottle, Throttle};
use crate::models::{load_target, AnalysisResult, BatchOutput};
use crate::services::{ContextBuilder, ResultSink};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{TargetCtx, TargetFlow};

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// 输入的组件数量
    pub requested: usize,
    /// 成功解析的数量
    pub succeeded: usize,
    /// 使用兜底结果的数量
    pub fallback: usize,
    /// 跳过的数量（文件缺失或重复）
    pub skipped: usize,
}

/// 一次批处理的结果
#[derive(Debug)]
pub struct BatchReport {
    pub output: BatchOutput,
    pub stats: BatchStats,
}

/// 批量处理器
pub struct BatchProcessor<C, T> {
    client: C,
    throttle: T,
    context_builder: ContextBuilder,
    sink: ResultSink,
    call_timeout: Option<Duration>,
}

impl<C: CompletionClient, T: Throttle> BatchProcessor<C, T> {
    pub fn new(client: C, throttle: T, context_builder: ContextBuilder, sink: ResultSink) -> Self {
        Self {
            client,
            throttle,
            context_builder,
            sink,
            call_timeout: None,
        }
    }

    /// 设置单次调用超时
    pub fn with_call_timeout(mut self, call_timeout: Option<Duration>) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// 处理所有组件并写入结果文件
    ///
    /// 只有输入为空或结果文件写入失败时返回错误
    pub async fn run(&self, paths: &[String]) -> AppResult<BatchReport> {
        if paths.is_empty() {
            return Err(InputError::EmptyTargetList.into());
        }

        let context = self.context_builder.build().await;
        let flow = TargetFlow::new(&self.client, self.call_timeout);

        let total = paths.len();
        let mut output = BatchOutput::new();
        let mut stats = BatchStats {
            requested: total,
            ..Default::default()
        };
        let mut has_invoked = false;

        for (index, path) in paths.iter().enumerate() {
            let ctx = TargetCtx::new(index + 1, total, path.as_str());

            if output.contains(path) {
                warn!("{} ⏭️ 跳过: {}", ctx, InputError::Duplicate { path: path.clone() });
                stats.skipped += 1;
                continue;
            }

            let target = match load_target(path).await {
                Ok(target) => target,
                Err(e) => {
                    warn!("{} ⏭️ 跳过: {}", ctx, e);
                    stats.skipped += 1;
                    continue;
                }
            };

            // 只在两次实际调用之间等待
            if has_invoked {
                self.throttle.pause().await;
            }
            has_invoked = true;

            info!("{} 🔍 开始分析...", ctx);

            let result = match flow.run(&target, &context, &ctx).await {
                Ok(result) => {
                    info!("{} ✓ 分析完成", ctx);
                    stats.succeeded += 1;
                    result
                }
                Err(e) => {
                    warn!("{} ❌ 分析失败，使用空结果: {}", ctx, e);
                    stats.fallback += 1;
                    AnalysisResult::fallback()
                }
            };

            output.insert(path.clone(), result);
        }

        self.sink.write(&output).await?;

        Ok(BatchReport { output, stats })
    }
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行应用主逻辑
    pub async fn run(&self, paths: &[String]) -> AppResult<BatchReport> {
        if paths.is_empty() {
            return Err(InputError::EmptyTargetList.into());
        }

        if self.config.llm_api_key.is_empty() {
            warn!("⚠️ 未设置 LLM_API_KEY，所有组件都将使用空结果");
        }

        log_startup(
            paths.len(),
            &self.config.llm_model_name,
            self.config.throttle_interval_ms,
        );

        let processor = BatchProcessor::new(
            OpenAiCompletionClient::new(&self.config),
            FixedDelayThrottle::new(self.config.throttle_interval()),
            ContextBuilder::new(&self.config.project_manifest, &self.config.project_readme),
            ResultSink::new(&self.config.output_file),
        )
        .with_call_timeout(self.config.llm_timeout());

        let report = processor.run(paths).await?;

        print_final_stats(
            report.stats.succeeded,
            report.stats.fallback,
            report.stats.skipped,
            report.stats.requested,
            &self.config.output_file,
        );

        Ok(report)
    }
}
