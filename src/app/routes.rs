use crate::core::service::ApiService;
use crate::core::{ApiResponse, RequestKind, SlugRequest};
use actix_web::http::{header, StatusCode};
use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Hello! Welcome to the glossary gateway server.";
pub const NOT_FOUND_MESSAGE: &str = "Ops! The page you are trying to access does not exist";

/// 將 service 的結果轉成 HTTP 回應；404 一律使用固定訊息
pub fn respond(response: ApiResponse) -> HttpResponse {
    if response.status == StatusCode::NOT_FOUND.as_u16() {
        return not_found_response();
    }

    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(&response.data)
}

fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": NOT_FOUND_MESSAGE }))
}

#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

#[get("/glossaries")]
pub async fn list_glossaries(service: web::Data<ApiService>) -> HttpResponse {
    tracing::debug!("GET /api/glossaries");
    respond(service.handle(None, RequestKind::Glossaries).await)
}

#[get("/articles")]
pub async fn list_articles(service: web::Data<ApiService>) -> HttpResponse {
    tracing::debug!("GET /api/articles");
    respond(service.handle(None, RequestKind::Articles).await)
}

/// glossary 與 article 共用同一個 `/{base}/{item}` 路徑。
/// 類型刻意由 base 決定：`glossary` 為 glossary，其餘一律視為 article。
#[get("/{base}/{item}")]
pub async fn get_item(
    service: web::Data<ApiService>,
    path: web::Path<SlugRequest>,
) -> HttpResponse {
    let slug = path.into_inner();
    let kind = RequestKind::for_slug(&slug);
    tracing::debug!("GET /api/{}/{} as {}", slug.base, slug.item, kind);
    respond(service.handle(Some(&slug), kind).await)
}

/// CORS 預檢請求，任何路徑都直接回 204
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent()
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

pub async fn fallback() -> HttpResponse {
    not_found_response()
}

pub fn glossary_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_glossaries);
}

pub fn article_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_articles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemsPayload, NormalizedItem};
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_not_found_uses_fixed_message() {
        let response = respond(ApiResponse::message(404, "Data not found"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({ "message": NOT_FOUND_MESSAGE }));
    }

    #[actix_web::test]
    async fn test_status_is_preserved() {
        let response = respond(ApiResponse::message(400, "Invalid request type"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = respond(ApiResponse::ok(ItemsPayload::new(
            RequestKind::Article,
            vec![NormalizedItem {
                slug: "/a/".to_string(),
                title: "A".to_string(),
                lang: "en".to_string(),
                date: None,
                meta_title: None,
                meta_description: None,
                excerpt: None,
                content: None,
            }],
        )));
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["itemsCount"], 1);
        assert_eq!(value["article"][0]["slug"], "/a/");
    }
}
