pub mod target_ctx;
pub mod target_flow;

pub use target_ctx::TargetCtx;
pub use target_flow::TargetFlow;
