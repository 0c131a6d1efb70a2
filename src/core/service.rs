use crate::core::request_config::{RequestConfig, RequestConfigurator};
use crate::core::{ApiResponse, Fetcher, ItemsPayload, NormalizedItem, RequestKind, SlugRequest};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;
use std::sync::Arc;

/// 串起 configurator → fetcher → mapper，所有錯誤都在這裡轉成回應
#[derive(Clone)]
pub struct ApiService {
    configurator: RequestConfigurator,
    fetcher: Arc<dyn Fetcher>,
}

impl ApiService {
    pub fn new(configurator: RequestConfigurator, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            configurator,
            fetcher,
        }
    }

    pub async fn handle(&self, slug: Option<&SlugRequest>, kind: RequestKind) -> ApiResponse {
        match self.fetch_items(slug, kind).await {
            Ok(payload) => {
                tracing::info!("✅ {} request returned {} items", kind, payload.items_count());
                ApiResponse::ok(payload)
            }
            Err(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!("❌ {} request failed: {}", kind, e);
                } else {
                    tracing::warn!("{} request rejected ({}): {}", kind, status.as_u16(), e);
                }
                ApiResponse::message(status.as_u16(), e.client_message())
            }
        }
    }

    pub async fn fetch_items(
        &self,
        slug: Option<&SlugRequest>,
        kind: RequestKind,
    ) -> Result<ItemsPayload> {
        let config = self
            .configurator
            .configure(slug, kind)
            .ok_or(GatewayError::InvalidRequest)?;

        tracing::debug!("Fetching {} from {}", kind, config.url);
        let body = self.fetcher.fetch_json(&config.url).await?;

        if is_falsy(&body) {
            return Err(GatewayError::NotFound);
        }

        let items = normalize(&config, &body)?;
        Ok(ItemsPayload::new(kind, items))
    }
}

/// 套用 mapper：有 property_name 時處理整個清單，否則視為單筆
pub fn normalize(config: &RequestConfig, body: &Value) -> Result<Vec<NormalizedItem>> {
    match config.property_name {
        Some(property) => {
            let entries = body
                .get(property)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    GatewayError::payload(format!(
                        "expected an array under property '{}'",
                        property
                    ))
                })?;

            entries
                .iter()
                .map(|entry| config.mapper.apply(entry))
                .collect()
        }
        None => Ok(vec![config.mapper.apply(body)?]),
    }
}

fn is_falsy(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
