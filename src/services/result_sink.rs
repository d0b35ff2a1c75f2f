//! 结果输出 - 业务能力层
//!
//! 只负责"把整个批次写成一个 JSON 文件"能力

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppResult, SinkError};
use crate::models::analysis::BatchOutput;

/// 结果输出服务
pub struct ResultSink {
    output_path: String,
}

impl ResultSink {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// 写入结果文件（完全覆盖旧文件）
    ///
    /// 写入失败直接返回错误，没有兜底
    pub async fn write(&self, output: &BatchOutput) -> AppResult<()> {
        let mut json = serde_json::to_string_pretty(output).map_err(SinkError::Serialize)?;
        json.push('\n');

        debug!("写入结果文件: {} ({} 字节)", self.output_path, json.len());

        fs::write(&self.output_path, json)
            .await
            .map_err(|source| SinkError::Write {
                path: self.output_path.clone(),
                source,
            })?;

        info!("💾 已写入 {} 条结果到 {}", output.len(), self.output_path);
        Ok(())
    }
}
