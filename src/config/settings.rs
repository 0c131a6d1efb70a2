use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::config::toml_config::TomlConfig;
use crate::config::LogFormat;
use crate::core::request_config::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_positive_number, validate_range,
    validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

/// 合併預設值、TOML 與 CLI 之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upstream_base_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub cors_allow_origin: String,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cors_allow_origin: DEFAULT_CORS_ALLOW_ORIGIN.to_string(),
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// 以 TOML 內容覆寫目前的值
    pub fn merge_toml(mut self, toml: TomlConfig) -> Self {
        if let Some(host) = toml.server.host {
            self.host = host;
        }
        if let Some(port) = toml.server.port {
            self.port = port;
        }
        if let Some(origin) = toml.server.cors_allow_origin {
            self.cors_allow_origin = origin;
        }
        if let Some(base_url) = toml.upstream.base_url {
            self.upstream_base_url = base_url;
        }
        if let Some(timeout) = toml.upstream.timeout_seconds {
            self.request_timeout_seconds = timeout;
        }
        if let Some(user_agent) = toml.upstream.user_agent {
            self.user_agent = user_agent;
        }
        if let Some(format) = toml.logging.format {
            self.log_format = format;
        }
        if let Some(verbose) = toml.logging.verbose {
            self.verbose = verbose;
        }
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl ConfigProvider for AppConfig {
    fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_positive_number("server.port", u64::from(self.port), 1)?;
        validate_non_empty_string("server.cors_allow_origin", &self.cors_allow_origin)?;
        validate_header_value("server.cors_allow_origin", &self.cors_allow_origin)?;
        validate_url("upstream.base_url", &self.upstream_base_url)?;
        validate_range("upstream.timeout_seconds", self.request_timeout_seconds, 1, 300)?;
        validate_non_empty_string("upstream.user_agent", &self.user_agent)?;
        validate_header_value("upstream.user_agent", &self.user_agent)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
