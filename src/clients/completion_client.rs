use crate::error::AppResult;
use std::future::Future;

/// 外部生成服务的能力抽象
///
/// 给定 prompt，返回文本补全或错误（包括频率限制拒绝）
pub trait CompletionClient: Send + Sync {
    /// 当前使用的模型名称（用于日志和错误信息）
    fn model_name(&self) -> &str;

    fn complete(&self, prompt: &str) -> impl Future<Output = AppResult<String>> + Send;
}
