use anyhow::Result;
use std::path::PathBuf;

use sentiment_batch::utils::logging;
use sentiment_batch::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，缺少密钥时立即退出
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 输入文件（可选），不传时使用演示样例
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    if args.next().is_some() {
        anyhow::bail!("用法: sentiment_batch [输入文件.txt|.csv|.toml]");
    }

    // 初始化并运行应用
    App::initialize(config).run(input.as_deref()).await?;

    Ok(())
}
