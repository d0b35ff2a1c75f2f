use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入列表相关错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 项目上下文读取错误
    #[error("上下文错误: {0}")]
    Context(#[from] ContextError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// LLM 返回内容无法解析
    #[error("响应错误: {0}")]
    Response(#[from] ResponseError),
    /// 结果文件写入错误
    #[error("输出错误: {0}")]
    Sink(#[from] SinkError),
}

/// 输入列表错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 没有提供任何组件文件
    #[error("没有提供任何待分析的组件文件")]
    EmptyTargetList,
    /// 文件不存在或无法读取
    #[error("文件不存在或无法读取: {path}")]
    Missing {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 重复的文件路径
    #[error("重复的文件路径: {path}")]
    Duplicate { path: String },
}

/// 项目上下文错误
#[derive(Debug, Error)]
pub enum ContextError {
    /// 读取项目清单失败
    #[error("读取项目清单失败 ({path}): {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 解析项目清单失败
    #[error("解析项目清单失败 ({path}): {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 读取说明文档失败
    #[error("读取说明文档失败 ({path}): {source}")]
    ReadmeRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// API 调用失败（包括频率限制拒绝）
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 调用超时
    #[error("LLM调用超时 (模型: {model}, {} 毫秒)", .limit.as_millis())]
    Timeout {
        model: String,
        limit: std::time::Duration,
    },
}

/// LLM 响应解析错误
#[derive(Debug, Error)]
pub enum ResponseError {
    /// 去掉代码块标记后仍不是合法 JSON
    #[error("无法解析LLM返回的JSON (响应: {preview}): {source}")]
    Malformed {
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 结果输出错误
#[derive(Debug, Error)]
pub enum SinkError {
    /// 序列化失败
    #[error("结果序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
    /// 写入文件失败
    #[error("写入结果文件失败 ({path}): {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建LLM API调用错误
    pub fn llm_api_failed(
        model: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Llm(LlmError::ApiCallFailed {
            model: model.into(),
            source: source.into(),
        })
    }

    /// 创建文件缺失错误
    pub fn missing_input(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Input(InputError::Missing {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_reports_sub_second_limit() {
        let timeout = AppError::from(LlmError::Timeout {
            model: "gemini-2.0-flash".to_string(),
            limit: std::time::Duration::from_millis(50),
        });
        assert!(timeout.to_string().contains("50 毫秒"));
    }

    #[test]
    fn test_sink_message_includes_path() {
        let sink = AppError::from(SinkError::Write {
            path: "analysis.json".to_string(),
            source: std::io::Error::other("disk full"),
        });
        assert!(sink.to_string().contains("analysis.json"));
    }

    #[test]
    fn test_message_includes_path() {
        let err = AppError::missing_input(
            "src/Button.jsx",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("src/Button.jsx"));
    }
}
