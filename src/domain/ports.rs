use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 對上游發出單次 GET 並回傳解碼後的 JSON
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
