//! 项目级上下文

use serde::Deserialize;
use std::collections::BTreeMap;

/// 项目清单（package.json 中用到的字段）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

/// 项目上下文描述
///
/// 每次运行只构建一次，所有 prompt 共用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    text: String,
}

impl ProjectContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for ProjectContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
