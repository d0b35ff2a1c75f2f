//! LLM 响应规范化 - 业务能力层
//!
//! 去掉代码块标记后严格解析 JSON，只有语法错误才算失败，不在这里重试；
//! 解析出的结构不做校验

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::ResponseError;
use crate::models::analysis::AnalysisResult;
use crate::utils::logging::truncate_text;

/// 错误信息中保留的响应预览长度
const PREVIEW_CHARS: usize = 120;

/// 代码块标记（可带语言标签，如 ```json）
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```[A-Za-z0-9_+-]*").expect("代码块正则无效"))
}

/// 去掉所有代码块标记并去除首尾空白
pub fn strip_fences(raw: &str) -> String {
    fence_regex().replace_all(raw, "").trim().to_string()
}

/// 把 LLM 原始输出解析为分析结果
pub fn normalize(raw: &str) -> Result<AnalysisResult, ResponseError> {
    let cleaned = strip_fences(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|source| ResponseError::Malformed {
        preview: truncate_text(&cleaned, PREVIEW_CHARS),
        source,
    })?;
    Ok(AnalysisResult::from_value(value))
}
