use crate::error::{AppResult, ConfigError};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// IUPred3 网页服务地址
pub const DEFAULT_BASE_URL: &str = "https://iupred3.elte.hu";

/// 会话凭据（从浏览器 cookie 中获取，原样传递）
#[derive(Clone)]
pub struct SessionCredentials {
    pub csrf_token: String,
    pub session_id: String,
}

impl SessionCredentials {
    pub fn new(csrf_token: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            session_id: session_id.into(),
        }
    }

    /// 生成 Cookie 请求头的值
    pub fn cookie_header(&self) -> String {
        format!(
            "csrftoken={}; sessionid={}",
            self.csrf_token, self.session_id
        )
    }
}

// 日志中不打印凭据本身
impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("csrf_token", &"***")
            .field("session_id", &"***")
            .finish()
    }
}

/// 服务相关设置
#[derive(Clone, Debug)]
pub struct ServiceSettings {
    /// 服务基础地址（不带结尾的 `/`）
    pub base_url: String,
    /// 单个请求的超时时间
    pub request_timeout: Duration,
    /// 每个阶段同时进行的请求数量
    pub max_concurrent_requests: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            max_concurrent_requests: 1,
        }
    }
}

impl ServiceSettings {
    /// 从环境变量读取设置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();

        let base_url = std::env::var("IUPRED_BASE_URL").unwrap_or(default.base_url);
        let request_timeout = match parse_env::<u64>("REQUEST_TIMEOUT_SECS", "u64")? {
            Some(secs) => request_timeout_from_secs(secs)?,
            None => default.request_timeout,
        };
        let max_concurrent_requests = parse_env::<usize>("MAX_CONCURRENT_REQUESTS", "usize")?
            .unwrap_or(default.max_concurrent_requests);

        Self {
            base_url,
            request_timeout,
            max_concurrent_requests,
        }
        .validated()
    }

    /// 校验并规范化设置
    pub fn validated(mut self) -> AppResult<Self> {
        let trimmed = self.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        self.base_url = trimmed;
        self.max_concurrent_requests = self.max_concurrent_requests.max(1);
        Ok(self)
    }
}

/// 超时必须大于 0
fn request_timeout_from_secs(secs: u64) -> AppResult<Duration> {
    if secs == 0 {
        return Err(ConfigError::EnvVarParseFailed {
            var_name: "REQUEST_TIMEOUT_SECS".to_string(),
            value: secs.to_string(),
            expected_type: "正整数（秒）".to_string(),
        }
        .into());
    }
    Ok(Duration::from_secs(secs))
}

fn parse_env<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}

/// 程序配置
///
/// 在 `main` 中由命令行参数和环境变量组装，之后显式传入流水线
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入的 FASTA 文件
    pub input_path: PathBuf,
    pub credentials: SessionCredentials,
    pub service: ServiceSettings,
}

impl Config {
    pub fn new(
        input_path: impl Into<PathBuf>,
        credentials: SessionCredentials,
        service: ServiceSettings,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            credentials,
            service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_header() {
        let creds = SessionCredentials::new("tok", "sid");
        assert_eq!(creds.cookie_header(), "csrftoken=tok; sessionid=sid");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = SessionCredentials::new("secret-token", "secret-session");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_validated_trims_trailing_slash() {
        let settings = ServiceSettings {
            base_url: "http://127.0.0.1:8080/".to_string(),
            max_concurrent_requests: 0,
            ..Default::default()
        }
        .validated()
        .unwrap();

        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.max_concurrent_requests, 1);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = request_timeout_from_secs(0).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
        assert_eq!(
            request_timeout_from_secs(30).unwrap(),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_validated_rejects_garbage_url() {
        let result = ServiceSettings {
            base_url: "not a url".to_string(),
            ..Default::default()
        }
        .validated();

        assert!(result.is_err());
    }
}
