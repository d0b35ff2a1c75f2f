use anyhow::Result;
use component_mock_gen::utils::logging;
use component_mock_gen::{App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        error!("用法: component_mock_gen <组件文件> [组件文件...]");
    }

    // 初始化并运行应用
    App::new(config).run(&paths).await?;

    Ok(())
}
