/// IUPred3 网页接口客户端
///
/// 封装提交序列和获取结果两个 HTTP 调用
use crate::config::{Config, SessionCredentials};
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{DisorderResult, ResultHandle};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Client;
use tracing::debug;

/// 提交接口
const PLOT_ENDPOINT: &str = "/plot";

/// IUPred3 客户端
///
/// 整个运行期间只持有一个 `reqwest::Client`，随 `App` 一起释放
pub struct IupredClient {
    http: Client,
    base_url: String,
    credentials: SessionCredentials,
}

impl IupredClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.service.request_timeout)
            .build()
            .map_err(|e| AppError::api_request_failed(config.service.base_url.clone(), e))?;

        Ok(Self {
            http,
            base_url: config.service.base_url.clone(),
            credentials: config.credentials.clone(),
        })
    }

    /// 提交一条序列
    ///
    /// # 参数
    /// - `residues`: 序列内容
    ///
    /// # 返回
    /// 返回服务端的 HTML 页面
    pub async fn submit_sequence(&self, residues: &str) -> AppResult<String> {
        let url = format!("{}{}", self.base_url, PLOT_ENDPOINT);
        let form = [
            ("email", ""),
            ("accession", ""),
            ("inp_seq", residues),
            ("aln_file", ""),
            ("csrfmiddlewaretoken", self.credentials.csrf_token.as_str()),
        ];

        debug!("提交序列到 {}，长度: {}", url, residues.len());

        let response = self
            .http
            .post(&url)
            .header(COOKIE, self.credentials.cookie_header())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(PLOT_ENDPOINT, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: PLOT_ENDPOINT.to_string(),
                status,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(PLOT_ENDPOINT, e))?;

        debug!("提交完成，响应长度: {}", body.len());

        Ok(body)
    }

    /// 获取预测结果
    ///
    /// # 参数
    /// - `handle`: 从提交页面中提取的结果句柄
    pub async fn fetch_result(&self, handle: &ResultHandle) -> AppResult<DisorderResult> {
        let endpoint = handle.raw_json_path();
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("获取结果: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus { endpoint, status }.into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        serde_json::from_str(&body).map_err(|e| AppError::json_parse_failed(endpoint, e))
    }
}
