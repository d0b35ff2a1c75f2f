//! 待分析的组件文件

/// 需要严格遵守类型声明的文件后缀
const TYPED_EXTENSIONS: [&str; 2] = [".ts", ".tsx"];

/// 单个分析目标
///
/// 读取后只读，不再修改
#[derive(Debug, Clone)]
pub struct AnalysisTarget {
    /// 文件路径（同时作为输出的键）
    pub path: String,
    /// 文件原始内容
    pub content: String,
    /// 是否为带类型声明的文件（.ts / .tsx）
    pub is_typed: bool,
}

impl AnalysisTarget {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        let is_typed = is_typed_path(&path);
        Self {
            path,
            content: content.into(),
            is_typed,
        }
    }
}

/// 判断路径是否为带类型的文件
pub fn is_typed_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    TYPED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_flag() {
        assert!(AnalysisTarget::new("src/Card.tsx", "").is_typed);
        assert!(AnalysisTarget::new("src/hooks/useUser.TS", "").is_typed);
        assert!(!AnalysisTarget::new("src/Button.jsx", "").is_typed);
        assert!(!AnalysisTarget::new("src/types.d.tsx.bak", "").is_typed);
    }
}
