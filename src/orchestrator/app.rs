//! 应用入口 - 编排层
//!
//! 持有配置、HTTP 客户端和取消令牌，驱动流水线并输出结果

use crate::clients::IupredClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{load_fasta_file, RecordOutcome};
use crate::services::render;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::DisorderPipeline;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// 应用主结构
pub struct App {
    config: Config,
    client: IupredClient,
    cancel: CancellationToken,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub rendered: usize,
    pub dropped: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let client = IupredClient::new(&config)?;

        Ok(Self {
            config,
            client,
            cancel: CancellationToken::new(),
        })
    }

    /// 取消令牌，触发后运行以 `AppError::Cancelled` 结束
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// 运行应用主逻辑，结果写入 `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> AppResult<RunStats> {
        // 文件检查在任何网络请求之前
        let records = load_fasta_file(&self.config.input_path)?;

        log_startup(
            &self.config.input_path.display().to_string(),
            &self.config.service.base_url,
            self.config.service.max_concurrent_requests,
        );

        let pipeline = DisorderPipeline::new(
            &self.client,
            self.config.service.max_concurrent_requests,
            self.cancel.clone(),
        );
        let outcomes = pipeline.run(records).await?;

        for outcome in &outcomes {
            match outcome {
                RecordOutcome::Rendered(result) => {
                    render(result, out).map_err(|e| AppError::file_write_failed("<stdout>", e))?;
                }
                RecordOutcome::Dropped { record, reason } => {
                    debug!("未输出 {}: {}", record, reason);
                }
            }
        }
        out.flush()
            .map_err(|e| AppError::file_write_failed("<stdout>", e))?;

        let rendered = outcomes.iter().filter(|o| o.is_rendered()).count();
        let stats = RunStats {
            rendered,
            dropped: outcomes.len() - rendered,
            total: outcomes.len(),
        };

        print_final_stats(stats.rendered, stats.dropped, stats.total);

        Ok(stats)
    }

    /// 监听 Ctrl-C 并触发取消
    pub fn spawn_ctrl_c_listener(&self) -> tokio::task::JoinHandle<()> {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("收到 Ctrl-C，正在取消...");
                cancel.cancel();
            }
        })
    }
}
