pub mod settings;
pub mod toml_config;

pub use settings::AppConfig;

use serde::Deserialize;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::utils::logger;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "glossary-gateway")]
#[command(about = "HTTP gateway re-exposing healthcare.gov glossary and article content")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Base URL of the upstream content API")]
    pub upstream_base_url: Option<String>,

    #[arg(long)]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long)]
    pub cors_allow_origin: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 預設值 < TOML 檔案 < CLI 參數
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            config = config.merge_toml(TomlConfig::from_file(path)?);
        }

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(base_url) = &self.upstream_base_url {
            config.upstream_base_url = base_url.clone();
        }
        if let Some(timeout) = self.request_timeout_seconds {
            config.request_timeout_seconds = timeout;
        }
        if let Some(origin) = &self.cors_allow_origin {
            config.cors_allow_origin = origin.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config.verbose |= self.verbose;

        Ok(config)
    }

    /// 解析設定並初始化日誌；解析失敗時改用 CLI 的日誌參數記錄錯誤
    pub fn bootstrap(&self) -> Result<AppConfig> {
        match self.resolve() {
            Ok(config) => {
                logger::init_logger(config.log_format, config.verbose);
                Ok(config)
            }
            Err(e) => {
                logger::init_logger(self.log_format.unwrap_or_default(), self.verbose);
                tracing::error!("❌ Failed to resolve configuration: {}", e);
                Err(e)
            }
        }
    }
}
