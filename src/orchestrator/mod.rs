//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! - 持有 HTTP 客户端和取消令牌
//! - 打开输入文件（在任何网络请求之前）
//! - 驱动 `workflow::DisorderPipeline`
//! - 按输入顺序输出结果，汇总统计
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App
//!     ↓
//! workflow::DisorderPipeline (提交 → 提取 → 获取)
//!     ↓
//! services (句柄提取 / 渲染)  +  clients::IupredClient
//!     ↓
//! models (FASTA 读取 / 数据结构)
//! ```

pub mod app;

pub use app::{App, RunStats};
