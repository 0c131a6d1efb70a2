//! HTTP surface: route groups, CORS headers and service wiring.

pub mod routes;

use crate::adapters::HttpFetcher;
use crate::core::request_config::RequestConfigurator;
use crate::core::service::ApiService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{guard, web};
use std::sync::Arc;

/// 以設定建立 reqwest fetcher 與 service
pub fn build_service<C: ConfigProvider + ?Sized>(config: &C) -> Result<ApiService> {
    let fetcher = HttpFetcher::from_config(config)?;
    Ok(ApiService::new(
        RequestConfigurator::new(config.upstream_base_url()),
        Arc::new(fetcher),
    ))
}

pub fn cors_headers(allow_origin: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin.to_string()))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
}

/// 掛上 `/`、`/api` 下的兩組路由，以及未匹配路徑的 404。
/// OPTIONS 預檢在其他路由之前處理，不會落到 404。
pub fn configure(service: web::Data<ApiService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(service)
            .service(
                web::resource("/{tail:.*}")
                    .guard(guard::Options())
                    .to(routes::preflight),
            )
            .service(routes::welcome)
            .service(
                web::scope("/api")
                    .configure(routes::glossary_routes)
                    .configure(routes::article_routes)
                    .service(routes::get_item),
            )
            .default_service(web::to(routes::fallback));
    }
}
