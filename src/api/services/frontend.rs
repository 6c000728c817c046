use actix_web::{HttpRequest, HttpResponse, Result, web};
use rust_embed::Embed;
use tracing::{debug, trace};

use crate::api::context::HttpContext;

// 使用 RustEmbed 嵌入浏览器端页面
#[derive(Embed)]
#[folder = "web/"]
struct WebAssets;

/// Placeholder in `index.html` replaced with the API origin
const API_BASE_PLACEHOLDER: &str = "%API_BASE%";

pub struct FrontendService;

impl FrontendService {
    /// GET / - 返回 index.html 并注入 API 地址
    pub async fn handle_index(ctx: web::Data<HttpContext>) -> Result<HttpResponse> {
        trace!("Serving web client index page");

        match WebAssets::get("index.html") {
            Some(content) => {
                let html = String::from_utf8_lossy(&content.data)
                    .replace(API_BASE_PLACEHOLDER, &ctx.base_url)
                    .replace("%SNAPLINK_VERSION%", env!("CARGO_PKG_VERSION"));

                Ok(HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html))
            }
            None => Ok(HttpResponse::NotFound().body("Web client not bundled")),
        }
    }

    /// GET /assets/{path}
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match WebAssets::get(&format!("assets/{}", path)) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    /// GET /favicon.ico - 没有图标文件时返回空响应
    pub async fn handle_favicon() -> Result<HttpResponse> {
        let body = WebAssets::get("favicon.ico")
            .map(|f| f.data.into_owned())
            .unwrap_or_default();
        Ok(HttpResponse::Ok().content_type("image/x-icon").body(body))
    }

    fn get_content_type(path: &str) -> &'static str {
        match path.rsplit('.').next() {
            Some("css") => "text/css; charset=utf-8",
            Some("js") => "application/javascript; charset=utf-8",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(
            FrontendService::get_content_type("app.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(
            FrontendService::get_content_type("style.css"),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            FrontendService::get_content_type("blob"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_client_is_embedded() {
        let index = WebAssets::get("index.html").expect("index.html should be embedded");
        let html = String::from_utf8_lossy(&index.data);
        assert!(html.contains(API_BASE_PLACEHOLDER));
        assert!(WebAssets::get("assets/app.js").is_some());
        assert!(WebAssets::get("assets/style.css").is_some());
    }
}
