//! 无序区渲染服务 - 业务能力层
//!
//! 把每个残基的分数转换为 `D`（无序）或 `-`（有序）并输出

use crate::models::DisorderResult;
use std::io::{self, Write};
use tracing::warn;

/// 分数严格大于该值判为无序
pub const DISORDER_THRESHOLD: f64 = 0.5;
pub const DISORDER_SYMBOL: char = 'D';
pub const ORDER_SYMBOL: char = '-';

/// 将分数序列转换为符号串
pub fn classify(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|&score| {
            if score > DISORDER_THRESHOLD {
                DISORDER_SYMBOL
            } else {
                ORDER_SYMBOL
            }
        })
        .collect()
}

/// 输出一条结果：序列一行，符号串一行
///
/// 分数个数与序列长度不一致时仍然输出，只记录警告
pub fn render<W: Write>(result: &DisorderResult, out: &mut W) -> io::Result<()> {
    if !result.is_aligned() {
        warn!(
            "⚠️ 序列长度 ({}) 与分数个数 ({}) 不一致，输出可能错位",
            result.sequence.chars().count(),
            result.iupred2.len()
        );
    }

    writeln!(out, "{}", result.sequence)?;
    writeln!(out, "{}", classify(&result.iupred2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold_is_strict() {
        assert_eq!(classify(&[0.2, 0.6, 0.5, 0.51]), "-D-D");
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(&[]), "");
    }

    #[test]
    fn test_render_two_lines() {
        let result = DisorderResult {
            sequence: "AAY".to_string(),
            iupred2: vec![0.6, 0.6, 0.2],
        };
        let mut out = Vec::new();
        render(&result, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "AAY\nDD-\n");
    }

    #[test]
    fn test_render_misaligned_still_prints() {
        let result = DisorderResult {
            sequence: "MKVL".to_string(),
            iupred2: vec![0.9, 0.1],
        };
        let mut out = Vec::new();
        render(&result, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "MKVL\nD-\n");
    }
}
