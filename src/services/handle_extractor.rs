//! 结果句柄提取服务 - 业务能力层
//!
//! 只负责从提交页面中找出结果句柄，不关心请求和流程

use crate::models::{DropReason, ResultHandle};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 页面中标记结果链接的子串
const RAW_JSON_MARKER: &str = "raw_json";

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"raw_json(%[A-Z0-9]+)""#).expect("句柄正则表达式无效")
});

/// 句柄提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleExtraction {
    Found(ResultHandle),
    /// 页面中没有任何包含 `raw_json` 的行
    MarkerMissing,
    /// 第一条 `raw_json` 行不符合句柄格式
    PatternMismatch,
}

impl HandleExtraction {
    /// 转换为句柄或丢弃原因
    pub fn into_result(self) -> Result<ResultHandle, DropReason> {
        match self {
            HandleExtraction::Found(handle) => Ok(handle),
            HandleExtraction::MarkerMissing => Err(DropReason::MarkerMissing),
            HandleExtraction::PatternMismatch => Err(DropReason::HandleNotFound),
        }
    }
}

/// 从 HTML 中提取结果句柄
///
/// 只检查第一条包含 `raw_json` 的行；之后的行即使包含句柄也不使用
pub fn extract_result_handle(html: &str) -> HandleExtraction {
    let Some(line) = html.lines().find(|line| line.contains(RAW_JSON_MARKER)) else {
        debug!("响应中没有找到 {} 标记", RAW_JSON_MARKER);
        return HandleExtraction::MarkerMissing;
    };

    match HANDLE_RE.captures(line.trim()).and_then(|cap| cap.get(1)) {
        Some(m) => HandleExtraction::Found(ResultHandle::new(m.as_str())),
        None => {
            debug!("raw_json 行不包含句柄: {}", line.trim());
            HandleExtraction::PatternMismatch
        }
    }
}
