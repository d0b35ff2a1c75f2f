//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `total`: 组件总数
/// - `model`: 模型名称
/// - `interval_ms`: 调用间隔
pub fn log_startup(total: usize, model: &str, interval_ms: u64) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 组件模拟数据生成");
    info!("📄 待分析组件: {} 个", total);
    info!("🤖 模型: {}", model);
    info!("⏱️ 调用间隔: {} 毫秒", interval_ms);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `succeeded`: 成功数量
/// - `fallback`: 使用兜底结果的数量
/// - `skipped`: 跳过的数量
/// - `total`: 总数
/// - `output_path`: 结果文件路径
pub fn print_final_stats(
    succeeded: usize,
    fallback: usize,
    skipped: usize,
    total: usize,
    output_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", succeeded, total);
    info!("⚠️ 兜底: {}", fallback);
    info!("⏭️ 跳过: {}", skipped);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
