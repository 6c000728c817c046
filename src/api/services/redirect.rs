use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, trace};

use crate::api::context::HttpContext;
use crate::api::helpers::error_from_snaplink;
use crate::services::LinkService;
use crate::utils::ip::extract_client_ip;

/// Recorded when the peer address is not available
const UNKNOWN_IP: &str = "unknown";

pub struct RedirectService;

impl RedirectService {
    /// GET /{code}
    ///
    /// Resolve, record the click, then answer `302 Found`. The click is
    /// committed before the response is sent.
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<LinkService>,
        ctx: web::Data<HttpContext>,
    ) -> impl Responder {
        let code = path.into_inner();

        let link = match service.resolve(&code).await {
            Ok(link) => link,
            Err(e) => {
                debug!("Redirect for '{}' failed: {}", code, e);
                return error_from_snaplink(&e);
            }
        };

        let ip = extract_client_ip(&req, &ctx.trusted_proxies)
            .unwrap_or_else(|| UNKNOWN_IP.to_string());

        if let Err(e) = service.record_click(&code, &ip).await {
            return error_from_snaplink(&e);
        }

        trace!("Redirecting '{}' -> {}", code, link.original_url);
        HttpResponse::Found()
            .insert_header((header::LOCATION, link.original_url))
            .insert_header((header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"))
            .finish()
    }
}
