//! 项目上下文构建 - 业务能力层
//!
//! 只负责"描述当前项目"能力，整个批次只构建一次

use tracing::{debug, info};

use crate::models::context::{ProjectContext, ProjectManifest};
use crate::models::loaders::{load_manifest, load_readme};

/// README 最多保留的字符数
pub const README_MAX_CHARS: usize = 3000;

/// 没有任何项目信息时使用的占位文本
pub const PLACEHOLDER_CONTEXT: &str = "No project context available.";

const TRUNCATED_MARKER: &str = "... (truncated)";

/// 项目上下文构建器
pub struct ContextBuilder {
    manifest_path: String,
    readme_path: String,
}

impl ContextBuilder {
    pub fn new(manifest_path: impl Into<String>, readme_path: impl Into<String>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            readme_path: readme_path.into(),
        }
    }

    /// 读取项目文件并构建上下文
    ///
    /// 任何读取或解析失败都只降级为"无上下文"，不会中断运行
    pub async fn build(&self) -> ProjectContext {
        let manifest = match load_manifest(&self.manifest_path).await {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!("项目清单不可用: {}", e);
                None
            }
        };

        let readme = match load_readme(&self.readme_path).await {
            Ok(readme) => readme,
            Err(e) => {
                debug!("说明文档不可用: {}", e);
                None
            }
        };

        let context = compose_context(manifest.as_ref(), readme.as_deref());
        if context.as_str() == PLACEHOLDER_CONTEXT {
            info!("📁 未找到项目信息，使用通用上下文");
        } else {
            info!("📁 已加载项目上下文 ({} 字符)", context.as_str().chars().count());
        }
        context
    }
}

/// 把清单和说明文档拼成一段描述文本
pub fn compose_context(manifest: Option<&ProjectManifest>, readme: Option<&str>) -> ProjectContext {
    let mut sections = Vec::new();

    if let Some(manifest) = manifest {
        if let Some(name) = manifest.name.as_deref().filter(|s| !s.trim().is_empty()) {
            sections.push(format!("Project Name: {}", name));
        }
        if let Some(description) = manifest.description.as_deref().filter(|s| !s.trim().is_empty()) {
            sections.push(format!("Description: {}", description));
        }
        if !manifest.dependencies.is_empty() {
            let names: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();
            sections.push(format!("Dependencies: {}", names.join(", ")));
        }
    }

    if let Some(readme) = readme.map(str::trim).filter(|s| !s.is_empty()) {
        sections.push(format!("README Summary:\n{}", truncate_readme(readme)));
    }

    if sections.is_empty() {
        ProjectContext::new(PLACEHOLDER_CONTEXT)
    } else {
        ProjectContext::new(sections.join("\n"))
    }
}

fn truncate_readme(readme: &str) -> String {
    if readme.chars().count() > README_MAX_CHARS {
        let head: String = readme.chars().take(README_MAX_CHARS).collect();
        format!("{}{}", head, TRUNCATED_MARKER)
    } else {
        readme.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_compose_full_context() {
        let manifest = ProjectManifest {
            name: Some("shop-ui".to_string()),
            description: Some("电商前台".to_string()),
            dependencies: [("react", "^18"), ("react-router-dom", "^6")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };

        let context = compose_context(Some(&manifest), Some("# Shop\nSells shoes."));
        let text = context.as_str();
        assert!(text.contains("Project Name: shop-ui"));
        assert!(text.contains("Description: 电商前台"));
        assert!(text.contains("Dependencies: react, react-router-dom"));
        assert!(text.contains("Sells shoes."));
    }

    #[test]
    fn test_readme_truncated_at_limit() {
        let long = "字".repeat(README_MAX_CHARS + 10);
        let context = compose_context(None, Some(&long));
        let text = context.as_str();
        assert!(text.ends_with(TRUNCATED_MARKER));
        assert_eq!(
            text.chars().filter(|c| *c == '字').count(),
            README_MAX_CHARS
        );
    }

    #[test]
    fn test_nothing_available_uses_placeholder() {
        assert_eq!(compose_context(None, None).as_str(), PLACEHOLDER_CONTEXT);
        assert_eq!(
            compose_context(Some(&ProjectManifest::default()), Some("   ")).as_str(),
            PLACEHOLDER_CONTEXT
        );
    }

    #[tokio::test]
    async fn test_build_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("package.json");
        let readme = dir.path().join("README.md");
        fs::write(
            &manifest,
            r#"{"name":"dash","description":"Admin dashboard","dependencies":{"@tanstack/react-query":"^5"}}"#,
        )
        .unwrap();
        fs::write(&readme, "Internal analytics.").unwrap();

        let builder = ContextBuilder::new(manifest.to_str().unwrap(), readme.to_str().unwrap());
        let text = builder.build().await.to_string();
        assert!(text.contains("Project Name: dash"));
        assert!(text.contains("@tanstack/react-query"));
        assert!(text.contains("Internal analytics."));
    }

    #[tokio::test]
    async fn test_malformed_manifest_degrades_silently() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("package.json");
        fs::write(&manifest, "{ not json").unwrap();
        let missing_readme = dir.path().join("README.md");

        let builder = ContextBuilder::new(
            manifest.to_str().unwrap(),
            missing_readme.to_str().unwrap(),
        );
        assert_eq!(builder.build().await.as_str(), PLACEHOLDER_CONTEXT);
    }
}
