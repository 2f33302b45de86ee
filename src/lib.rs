//! # IUPred Submit
//!
//! 把蛋白质序列提交到 IUPred3 网页服务，并把结果转换为逐残基的无序/有序标注
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 序列记录、结果句柄、预测结果
//! - `FastaReader` - 惰性 FASTA 解析
//!
//! ### ② 客户端（Clients）
//! - `IupredClient` - 唯一的 HTTP 会话，提供提交与获取结果两个能力
//!
//! ### ③ 业务能力层（Services）
//! - `handle_extractor` - 从 HTML 中提取结果句柄
//! - `disorder_renderer` - 分数 → `D`/`-` 符号
//!
//! ### ④ 流程层（Workflow）
//! - `DisorderPipeline` - 提交全部 → 提取全部 → 获取全部
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 持有资源，输出结果和统计
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use clients::IupredClient;
pub use config::{Config, ServiceSettings, SessionCredentials};
pub use error::{AppError, AppResult};
pub use models::{DisorderResult, RecordOutcome, ResultHandle, SequenceRecord};
pub use orchestrator::{App, RunStats};
pub use workflow::DisorderPipeline;
