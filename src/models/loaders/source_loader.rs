use crate::error::{AppError, AppResult};
use crate::models::target::AnalysisTarget;
use tokio::fs;

/// 读取单个组件文件
///
/// 文件不存在或不可读时返回 `InputError::Missing`，由调用方跳过
pub async fn load_target(path: &str) -> AppResult<AnalysisTarget> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::missing_input(path, e))?;

    Ok(AnalysisTarget::new(path, content))
}
