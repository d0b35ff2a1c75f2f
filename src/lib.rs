//! # Component Mock Gen
//!
//! 一个为 UI 组件批量生成模拟 props 数据的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure / Clients）
//! - `clients/` - `CompletionClient`，外部 LLM 服务的唯一入口
//! - `infrastructure/` - `Throttle`，相邻两次调用之间的固定间隔
//!
//! ### ② 业务能力层（Services）
//! - `ContextBuilder` - 项目上下文（package.json + README）
//! - `compose_prompt` - 单个组件的 prompt
//! - `normalize` - 去掉代码块标记并解析 JSON
//! - `ResultSink` - 写 analysis.json
//!
//! ### ③ 流程层（Workflow）
//! - `TargetFlow` - 单个组件的流程（prompt → LLM → 解析）
//!
//! ### ④ 编排层（Orchestration）
//! - `BatchProcessor` - 顺序处理、节流、失败兜底、汇总输出

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{CompletionClient, OpenAiCompletionClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{FixedDelayThrottle, Throttle};
pub use models::{AnalysisResult, AnalysisTarget, BatchOutput, ProjectContext};
pub use orchestrator::{App, BatchProcessor, BatchReport, BatchStats};
