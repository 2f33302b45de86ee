use anyhow::{Context, Result};
use clap::Parser;
use iupred_submit::config::ServiceSettings;
use iupred_submit::utils::logging;
use iupred_submit::{App, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 可选，在解析参数之前加载
    let _ = dotenvy::dotenv();

    // 初始化日志
    logging::init();

    // 加载配置
    let cli = Cli::parse();
    let service = ServiceSettings::from_env().context("读取服务设置失败")?;
    let config = cli.into_config(service)?;

    // 初始化并运行应用
    let app = App::initialize(config)?;
    let ctrl_c = app.spawn_ctrl_c_listener();

    let mut stdout = std::io::stdout().lock();
    let result = app.run(&mut stdout).await;
    ctrl_c.abort();

    result.context("运行失败")?;

    Ok(())
}
