//! 命令行参数

use crate::config::{Config, ServiceSettings, SessionCredentials};
use crate::error::{AppResult, ConfigError};
use clap::Parser;
use std::path::PathBuf;

/// IUPred3 网页接口的命令行封装
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// FASTA 格式的蛋白质序列文件
    pub file: PathBuf,

    /// IUPred3 cookie 中的 csrftoken
    #[arg(long, env = "CSRF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// IUPred3 cookie 中的 sessionid
    #[arg(long, env = "SESSION_ID", hide_env_values = true)]
    pub sessionid: Option<String>,
}

impl Cli {
    /// 组装成显式的配置
    pub fn into_config(self, service: ServiceSettings) -> AppResult<Config> {
        let csrf_token = self.token.ok_or(ConfigError::MissingCredential {
            name: "csrf token",
            flag: "--token",
            env_var: "CSRF_TOKEN",
        })?;
        let session_id = self.sessionid.ok_or(ConfigError::MissingCredential {
            name: "session id",
            flag: "--sessionid",
            env_var: "SESSION_ID",
        })?;

        Ok(Config::new(
            self.file,
            SessionCredentials::new(csrf_token, session_id),
            service,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "iupred_submit",
            "proteins.fasta",
            "--token",
            "tok",
            "--sessionid",
            "sid",
        ])
        .unwrap();

        let config = cli.into_config(ServiceSettings::default()).unwrap();
        assert_eq!(config.input_path, PathBuf::from("proteins.fasta"));
        assert_eq!(config.credentials.csrf_token, "tok");
        assert_eq!(config.credentials.session_id, "sid");
    }

    #[test]
    fn test_missing_file_argument() {
        assert!(Cli::try_parse_from(["iupred_submit"]).is_err());
    }

    #[test]
    fn test_missing_credential_is_reported() {
        let cli = Cli {
            file: PathBuf::from("x.fasta"),
            token: Some("tok".to_string()),
            sessionid: None,
        };

        let err = cli.into_config(ServiceSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingCredential { flag: "--sessionid", .. })
        ));
    }
}
