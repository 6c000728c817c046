//! Link endpoints: create, list, info, delete, analytics

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{info, trace};

use crate::api::context::HttpContext;
use crate::api::helpers::{error_from_snaplink, json_response};
use crate::api::types::{ShortenRequest, ShortenResponse};
use crate::services::LinkService;

pub struct LinkHandlers;

impl LinkHandlers {
    /// POST /shorten
    pub async fn shorten(
        body: web::Json<ShortenRequest>,
        service: web::Data<LinkService>,
        ctx: web::Data<HttpContext>,
    ) -> impl Responder {
        let request = match body
            .into_inner()
            .validate(service.settings().alias_max_length)
        {
            Ok(request) => request,
            Err(e) => return error_from_snaplink(&e),
        };

        match service.create_link(request).await {
            Ok(link) => {
                info!("Created short link '{}'", link.short_code);
                json_response(
                    StatusCode::CREATED,
                    &ShortenResponse {
                        short_url: ctx.short_url(&link.short_code),
                        original_url: link.original_url,
                    },
                )
            }
            Err(e) => error_from_snaplink(&e),
        }
    }

    /// GET /api/urls
    pub async fn list_urls(service: web::Data<LinkService>) -> impl Responder {
        match service.list_links().await {
            Ok(links) => {
                trace!("Listing {} links", links.len());
                json_response(StatusCode::OK, &links)
            }
            Err(e) => error_from_snaplink(&e),
        }
    }

    /// GET /info/{code}
    pub async fn info(path: web::Path<String>, service: web::Data<LinkService>) -> impl Responder {
        match service.info(&path.into_inner()).await {
            Ok(info) => json_response(StatusCode::OK, &info),
            Err(e) => error_from_snaplink(&e),
        }
    }

    /// DELETE /delete/{code}
    pub async fn delete(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> impl Responder {
        match service.delete_link(&path.into_inner()).await {
            Ok(()) => HttpResponse::NoContent().finish(),
            Err(e) => error_from_snaplink(&e),
        }
    }

    /// GET /analytics/{code}
    pub async fn analytics(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> impl Responder {
        match service.analytics(&path.into_inner()).await {
            Ok(analytics) => json_response(StatusCode::OK, &analytics),
            Err(e) => error_from_snaplink(&e),
        }
    }
}
