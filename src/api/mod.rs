//! HTTP API
//!
//! Public REST surface, the redirect endpoint and the embedded browser
//! client, all mounted on one actix-web app via [`routes::configure`].

pub mod context;
pub mod error_code;
pub mod helpers;
pub mod routes;
pub mod services;
pub mod types;

pub use context::HttpContext;
pub use error_code::ErrorCode;
pub use routes::{configure, json_config};
