/// 日志工具模块
///
/// 初始化 tracing 并提供日志输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志写到 stderr，stdout 只留给预测结果。未设置 `RUST_LOG` 时默认 `info`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input`: 输入文件
/// - `base_url`: 服务地址
/// - `max_concurrent`: 每阶段最大并发数
pub fn log_startup(input: &str, base_url: &str, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - IUPred3 无序区预测");
    info!("📄 输入文件: {}", input);
    info!("🌐 服务地址: {}", base_url);
    info!("📊 每阶段最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `rendered`: 成功输出的数量
/// - `dropped`: 被丢弃的数量
/// - `total`: 总数
pub fn print_final_stats(rendered: usize, dropped: usize, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", rendered, total);
    info!("❌ 丢弃: {}", dropped);
    info!("{}", "=".repeat(60));
}
