use crate::error::{AppError, AppResult};
use crate::models::sequence::SequenceRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// 惰性 FASTA 解析器
///
/// - `>` 开头的行是标题
/// - 标题之后的所有行拼接为序列（去掉空白）
/// - 第一个标题之前的内容被忽略
/// - 不校验字符是否属于氨基酸字母表
pub struct FastaReader<R: BufRead> {
    lines: Lines<R>,
    pending_header: Option<String>,
    source: String,
    finished: bool,
}

impl<R: BufRead> FastaReader<R> {
    /// `source` 仅用于错误信息
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            pending_header: None,
            source: source.into(),
            finished: false,
        }
    }

    fn next_line(&mut self) -> Option<AppResult<String>> {
        self.lines.next().map(|line| {
            line.map_err(|e| AppError::file_read_failed(self.source.clone(), e))
        })
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = AppResult<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // 找到第一个标题
        while self.pending_header.is_none() {
            match self.next_line() {
                Some(Ok(line)) => {
                    if let Some(hdr) = line.strip_prefix('>') {
                        self.pending_header = Some(hdr.trim_end().to_string());
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }

        let header = self.pending_header.take().unwrap_or_default();
        let mut residues = String::new();

        loop {
            match self.next_line() {
                Some(Ok(line)) => {
                    if let Some(hdr) = line.strip_prefix('>') {
                        self.pending_header = Some(hdr.trim_end().to_string());
                        break;
                    }
                    residues.extend(line.chars().filter(|c| !c.is_whitespace()));
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    break;
                }
            }
        }

        Some(Ok(SequenceRecord { header, residues }))
    }
}

/// 打开 FASTA 文件
///
/// 文件不存在时立即返回 `FileError::NotFound`，此时不会发出任何网络请求
pub fn load_fasta_file(path: &Path) -> AppResult<FastaReader<BufReader<File>>> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(AppError::file_not_found(display));
    }

    let file = File::open(path).map_err(|e| AppError::file_read_failed(display.clone(), e))?;
    Ok(FastaReader::new(BufReader::new(file), display))
}
