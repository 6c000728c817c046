//! 路由表
//!
//! | Method | Path               | Handler                     |
//! |--------|--------------------|-----------------------------|
//! | GET    | /                  | web client                  |
//! | GET    | /assets/{path}     | web client assets           |
//! | GET    | /favicon.ico       | icon                        |
//! | POST   | /shorten           | create a link               |
//! | GET    | /api/urls          | recent links                |
//! | GET    | /info/{code}       | link details                |
//! | DELETE | /delete/{code}     | delete a link               |
//! | GET    | /analytics/{code}  | click count and recent IPs  |
//! | GET    | /{code}            | redirect (registered last)  |

use actix_web::web;

use super::helpers::json_error_handler;
use super::services::{FrontendService, LinkHandlers, RedirectService};

/// Largest accepted JSON body
const JSON_LIMIT_BYTES: usize = 16 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler)
}

/// Register every route on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(FrontendService::handle_index))
        .route("/favicon.ico", web::get().to(FrontendService::handle_favicon))
        .route(
            "/assets/{path:.*}",
            web::get().to(FrontendService::handle_static),
        )
        .route("/shorten", web::post().to(LinkHandlers::shorten))
        .route("/api/urls", web::get().to(LinkHandlers::list_urls))
        .route("/info/{code}", web::get().to(LinkHandlers::info))
        .route("/delete/{code}", web::delete().to(LinkHandlers::delete))
        .route("/analytics/{code}", web::get().to(LinkHandlers::analytics))
        // 通配短码路由必须最后注册
        .route("/{code}", web::get().to(RedirectService::handle_redirect));
}
