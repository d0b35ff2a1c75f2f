//! 调用节流 - 基础设施层
//!
//! 保证相邻两次 LLM 调用之间至少间隔固定时长，
//! 不读取限流响应头，也不做自适应退避

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// 节流器
///
/// 在下一次外部调用之前挂起当前任务
pub trait Throttle: Send + Sync {
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// 固定间隔节流器
#[derive(Debug, Clone)]
pub struct FixedDelayThrottle {
    interval: Duration,
}

impl FixedDelayThrottle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Throttle for FixedDelayThrottle {
    async fn pause(&self) {
        debug!("⏳ 等待 {} 毫秒以避免触发频率限制", self.interval.as_millis());
        sleep(self.interval).await;
    }
}
