//! Server mode
//!
//! Builds the actix-web app around the link service and runs it until
//! Ctrl+C, then drains in-flight requests and closes the database pool.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::Method, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::{self, HttpContext};
use crate::config::{CorsConfig, StaticConfig};
use crate::runtime::lifetime;

/// Validate CORS configuration at startup (runs once)
fn validate_cors_config(cors: &CorsConfig) {
    if cors.enabled && cors.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed. \
            Set allowed_origins explicitly or use '[\"*\"]' for any origin."
        );
    }
}

/// Build CORS middleware from configuration
///
/// Disabled CORS keeps the browser's same-origin policy.
pub fn build_cors(cors: &CorsConfig) -> Cors {
    if !cors.enabled {
        return Cors::default();
    }

    let mut middleware = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(["Content-Type", "Accept"])
        .max_age(3600);

    if cors.allowed_origins.iter().any(|o| o == "*") {
        middleware = middleware.allow_any_origin();
    } else {
        for origin in &cors.allowed_origins {
            middleware = middleware.allowed_origin(origin);
        }
    }

    middleware
}

/// Run the HTTP server
///
/// **Note**: Logging must be initialized before calling this function
pub async fn run_server(config: &'static StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let link_service = web::Data::from(startup.link_service.clone());
    let http_context = web::Data::new(HttpContext::from_server_config(&config.server));

    validate_cors_config(&config.cors);

    let workers = config.server.workers;
    info!("Using {} worker threads", workers);

    let bind_address = (config.server.host.as_str(), config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.cors))
            .wrap(Compress::default())
            .app_data(link_service.clone())
            .app_data(http_context.clone())
            .configure(api::configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers)
    .disable_signals()
    .bind(bind_address)
    .with_context(|| {
        format!(
            "Failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run();

    info!(
        "Server listening on http://{}:{} (public base URL {})",
        config.server.host, config.server.port, config.server.base_url
    );

    let handle = server.handle();

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            info!("HTTP server stopped");
        }
    }

    storage.close().await;
    info!("Graceful shutdown complete");
    Ok(())
}
