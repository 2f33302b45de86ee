//! 序列记录

use std::fmt;

/// 一条 FASTA 记录：标题行 + 序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// `>` 之后的标题内容
    pub header: String,
    /// 残基序列（多行已拼接）
    pub residues: String,
}

impl SequenceRecord {
    pub fn new(header: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            residues: residues.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[序列 {} 长度#{}]", self.header, self.len())
    }
}
