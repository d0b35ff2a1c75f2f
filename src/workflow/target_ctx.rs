//! 组件处理上下文
//!
//! 封装"我正在处理第几个组件"这一信息

use std::fmt::Display;

/// 组件处理上下文
#[derive(Debug, Clone)]
pub struct TargetCtx {
    /// 在输入列表中的序号（从1开始）
    pub index: usize,

    /// 输入列表总数
    pub total: usize,

    /// 文件路径
    pub path: String,
}

impl TargetCtx {
    pub fn new(index: usize, total: usize, path: impl Into<String>) -> Self {
        Self {
            index,
            total,
            path: path.into(),
        }
    }
}

impl Display for TargetCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[组件 {}/{} {}]", self.index, self.total, self.path)
    }
}
