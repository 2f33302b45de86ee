//! 无序预测流水线 - 流程层
//!
//! 核心职责：定义一次运行的完整处理流程
//!
//! 流程顺序：
//! 1. 读取并提交全部序列（POST /plot）
//! 2. 从每个响应中提取结果句柄
//! 3. 获取全部结果（GET /raw_json<handle>）
//!
//! 每个阶段内部按输入顺序输出；提取失败的记录不会中断运行，
//! 而是以 `RecordOutcome::Dropped` 的形式保留到最后

use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::clients::IupredClient;
use crate::error::{AppError, AppResult};
use crate::models::{DropReason, RecordOutcome, ResultHandle, SequenceRecord};
use crate::services::extract_result_handle;

/// 无序预测流水线
///
/// - 不持有 HTTP 客户端，只借用
/// - 每个阶段最多同时进行 `max_concurrent` 个请求
/// - 取消令牌触发时立即返回 `AppError::Cancelled`
pub struct DisorderPipeline<'a> {
    client: &'a IupredClient,
    max_concurrent: usize,
    cancel: CancellationToken,
}

impl<'a> DisorderPipeline<'a> {
    pub fn new(client: &'a IupredClient, max_concurrent: usize, cancel: CancellationToken) -> Self {
        Self {
            client,
            max_concurrent: max_concurrent.max(1),
            cancel,
        }
    }

    /// 运行三个阶段，按输入顺序返回每条记录的结果
    pub async fn run<I>(&self, records: I) -> AppResult<Vec<RecordOutcome>>
    where
        I: IntoIterator<Item = AppResult<SequenceRecord>>,
    {
        // ========== 阶段 1: 提交 ==========
        let submitted = self.guard(self.submit_all(records)).await?;
        info!("✓ 已提交 {} 条序列", submitted.len());

        // ========== 阶段 2: 提取句柄 ==========
        let extracted = extract_all(submitted);
        let handle_count = extracted.iter().filter(|(_, r)| r.is_ok()).count();
        info!("✓ 提取到 {}/{} 个结果句柄", handle_count, extracted.len());

        // ========== 阶段 3: 获取结果 ==========
        let outcomes = self.guard(self.fetch_all(extracted)).await?;
        info!("✓ 已获取 {} 个结果", handle_count);

        Ok(outcomes)
    }

    async fn submit_all<I>(&self, records: I) -> AppResult<Vec<(SequenceRecord, String)>>
    where
        I: IntoIterator<Item = AppResult<SequenceRecord>>,
    {
        let client = self.client;

        stream::iter(records.into_iter().enumerate())
            .map(|(idx, record)| async move {
                let record = record?;
                info!(
                    "[序列 {}] 📤 正在提交 {} (长度: {})",
                    idx + 1,
                    record.header,
                    record.len()
                );
                let page = client.submit_sequence(&record.residues).await?;
                Ok::<_, AppError>((record, page))
            })
            .buffered(self.max_concurrent)
            .try_collect()
            .await
    }

    async fn fetch_all(
        &self,
        extracted: Vec<(SequenceRecord, Result<ResultHandle, DropReason>)>,
    ) -> AppResult<Vec<RecordOutcome>> {
        let client = self.client;

        stream::iter(extracted)
            .map(|(record, handle)| async move {
                match handle {
                    Ok(handle) => {
                        debug!("获取 {} 的结果: {}", record.header, handle);
                        let result = client.fetch_result(&handle).await?;
                        Ok::<_, AppError>(RecordOutcome::Rendered(result))
                    }
                    Err(reason) => Ok(RecordOutcome::Dropped { record, reason }),
                }
            })
            .buffered(self.max_concurrent)
            .try_collect()
            .await
    }

    async fn guard<T>(&self, fut: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(AppError::Cancelled),
            result = fut => result,
        }
    }
}

/// 提取每个响应中的句柄，失败的记录只记录警告
fn extract_all(
    submitted: Vec<(SequenceRecord, String)>,
) -> Vec<(SequenceRecord, Result<ResultHandle, DropReason>)> {
    submitted
        .into_iter()
        .enumerate()
        .map(|(idx, (record, page))| {
            let handle = extract_result_handle(&page).into_result();
            if let Err(reason) = &handle {
                warn!("[序列 {}] ⚠️ {} 被丢弃: {}", idx + 1, record.header, reason);
            }
            (record, handle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ServiceSettings, SessionCredentials};

    fn offline_client() -> IupredClient {
        let config = Config::new(
            "unused.fasta",
            SessionCredentials::new("tok", "sid"),
            ServiceSettings::default(),
        );
        IupredClient::new(&config).unwrap()
    }

    #[test]
    fn test_read_error_stops_before_submission() {
        let client = offline_client();
        let pipeline = DisorderPipeline::new(&client, 1, CancellationToken::new());
        let records = vec![Err(AppError::file_read_failed(
            "input.fasta",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        ))];

        let result = tokio_test::block_on(pipeline.run(records));
        assert!(matches!(result, Err(AppError::File(_))));
    }

    #[test]
    fn test_cancelled_before_start() {
        let client = offline_client();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let pipeline = DisorderPipeline::new(&client, 1, cancel);

        let result = tokio_test::block_on(pipeline.run(vec![Ok(SequenceRecord::new("a", "MKV"))]));
        assert!(matches!(result, Err(AppError::Cancelled)));
    }

    #[test]
    fn test_empty_input_yields_no_outcomes() {
        let client = offline_client();
        let pipeline = DisorderPipeline::new(&client, 1, CancellationToken::new());

        let outcomes = tokio_test::block_on(pipeline.run(Vec::<AppResult<SequenceRecord>>::new())).unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_extract_all_keeps_order_and_marks_drops() {
        let submitted = vec![
            (
                SequenceRecord::new("a", "MKV"),
                "<a href=\"/raw_json%A1\">json</a>".to_string(),
            ),
            (SequenceRecord::new("b", "AAY"), "<p>error</p>".to_string()),
            (
                SequenceRecord::new("c", "QQ"),
                "<p>raw_json</p>".to_string(),
            ),
        ];

        let extracted = extract_all(submitted);

        assert_eq!(extracted.len(), 3);
        assert_eq!(extracted[0].0.header, "a");
        assert_eq!(extracted[0].1, Ok(ResultHandle::new("%A1")));
        assert_eq!(extracted[1].1, Err(DropReason::MarkerMissing));
        assert_eq!(extracted[2].1, Err(DropReason::HandleNotFound));
    }
}
