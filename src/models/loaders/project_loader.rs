use crate::error::ContextError;
use crate::models::context::ProjectManifest;
use std::io::ErrorKind;
use tokio::fs;

/// 读取项目清单
///
/// 文件不存在时返回 `Ok(None)`
pub async fn load_manifest(path: &str) -> Result<Option<ProjectManifest>, ContextError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ContextError::ManifestRead {
                path: path.to_string(),
                source,
            })
        }
    };

    let manifest = serde_json::from_str(&content).map_err(|source| ContextError::ManifestParse {
        path: path.to_string(),
        source,
    })?;

    Ok(Some(manifest))
}

/// 读取项目说明文档
///
/// 文件不存在时返回 `Ok(None)`
pub async fn load_readme(path: &str) -> Result<Option<String>, ContextError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ContextError::ReadmeRead {
            path: path.to_string(),
            source,
        }),
    }
}
