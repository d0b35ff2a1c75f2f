//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<路径>，持有结果表)
//!     ↓
//! workflow::TargetFlow (处理单个组件)
//!     ↓
//! services (能力层：context / prompt / normalize / sink)
//!     ↓
//! clients + infrastructure (LLM 调用、节流)
//! ```

pub mod batch_processor;

pub use batch_processor::{App, BatchProcessor, BatchReport, BatchStats};
