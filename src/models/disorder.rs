//! 预测结果相关的数据结构

use crate::models::sequence::SequenceRecord;
use serde::Deserialize;
use std::fmt;

/// 结果句柄：嵌在提交页面中的不透明标识（形如 `%ABC123`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHandle(String);

impl ResultHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 获取结果 JSON 的路径
    pub fn raw_json_path(&self) -> String {
        format!("/raw_json{}", self.0)
    }
}

impl fmt::Display for ResultHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `/raw_json<handle>` 返回的结果
///
/// 只解析需要的字段，其余字段忽略
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisorderResult {
    pub sequence: String,
    /// 每个残基一个分数，与 `sequence` 按位置对齐
    pub iupred2: Vec<f64>,
}

impl DisorderResult {
    /// 分数个数与序列长度是否一致
    pub fn is_aligned(&self) -> bool {
        self.sequence.chars().count() == self.iupred2.len()
    }
}

/// 记录被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// 响应中没有包含 `raw_json` 的行
    MarkerMissing,
    /// 有 `raw_json` 行，但匹配不到句柄
    HandleNotFound,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MarkerMissing => write!(f, "响应中没有 raw_json 标记"),
            DropReason::HandleNotFound => write!(f, "raw_json 行中没有结果句柄"),
        }
    }
}

/// 单条记录在流水线中的最终结果
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// 成功获取结果
    Rendered(DisorderResult),
    /// 被丢弃（不输出到 stdout）
    Dropped {
        record: SequenceRecord,
        reason: DropReason,
    },
}

impl RecordOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RecordOutcome::Rendered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let body = r#"{"sequence": "MKV", "iupred2": [0.1, 0.9, 0.3], "anchor2": [0.0, 0.0, 0.0]}"#;
        let result: DisorderResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.sequence, "MKV");
        assert_eq!(result.iupred2, vec![0.1, 0.9, 0.3]);
        assert!(result.is_aligned());
    }

    #[test]
    fn test_deserialize_missing_scores_fails() {
        let body = r#"{"sequence": "MKV"}"#;
        assert!(serde_json::from_str::<DisorderResult>(body).is_err());
    }

    #[test]
    fn test_raw_json_path() {
        let handle = ResultHandle::new("%ABC123");
        assert_eq!(handle.raw_json_path(), "/raw_json%ABC123");
    }
}
