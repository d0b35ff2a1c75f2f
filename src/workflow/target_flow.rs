//! 组件处理流程 - 流程层
//!
//! 核心职责：定义"一个组件"的完整处理流程
//!
//! 流程顺序：
//! 1. 构建 prompt
//! 2. 调用 LLM（可选超时）
//! 3. 规范化并解析响应

use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::clients::CompletionClient;
use crate::error::{AppResult, LlmError};
use crate::models::{AnalysisResult, AnalysisTarget, ProjectContext};
use crate::services::{compose_prompt, normalize};
use crate::utils::logging::truncate_text;
use crate::workflow::target_ctx::TargetCtx;

/// 组件处理流程
///
/// - 不持有批次状态
/// - 不处理兜底，失败直接返回给编排层
pub struct TargetFlow<'a, C> {
    client: &'a C,
    call_timeout: Option<Duration>,
}

impl<'a, C: CompletionClient> TargetFlow<'a, C> {
    pub fn new(client: &'a C, call_timeout: Option<Duration>) -> Self {
        Self {
            client,
            call_timeout,
        }
    }

    pub async fn run(
        &self,
        target: &AnalysisTarget,
        context: &ProjectContext,
        ctx: &TargetCtx,
    ) -> AppResult<AnalysisResult> {
        let prompt = compose_prompt(target, context);
        debug!("{} prompt 长度: {} 字符", ctx, prompt.chars().count());

        let completion = self.invoke(&prompt).await?;
        debug!("{} LLM 响应: {}", ctx, truncate_text(&completion, 200));

        Ok(normalize(&completion)?)
    }

    /// 调用外部服务，超时视为调用失败
    async fn invoke(&self, prompt: &str) -> AppResult<String> {
        match self.call_timeout {
            Some(limit) => match timeout(limit, self.client.complete(prompt)).await {
                Ok(result) => result,
                Err(_) => Err(LlmError::Timeout {
                    model: self.client.model_name().to_string(),
                    limit,
                }
                .into()),
            },
            None => self.client.complete(prompt).await,
        }
    }
}
