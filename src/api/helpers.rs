//! API 帮助函数

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{debug, error};

use super::error_code::ErrorCode;
use super::types::ApiError;
use crate::errors::SnaplinkError;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ApiError {
            code,
            message: message.to_string(),
        },
    )
}

/// 从 SnaplinkError 构建错误响应
///
/// Client errors keep their message; server-side failures are logged and
/// answered with a generic one.
pub fn error_from_snaplink(err: &SnaplinkError) -> HttpResponse {
    let status = err.http_status();
    if err.is_client_error() {
        debug!("Request rejected: {}", err);
        error_response(status, ErrorCode::from(err), err.message())
    } else {
        error!("{} [{}]", err, err.code());
        error_response(status, ErrorCode::from(err), "Internal server error")
    }
}

/// Turn actix's JSON extractor failures into the API error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        other => format!("Invalid JSON body: {}", other),
    };
    debug!("Rejected JSON payload: {}", message);

    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::InvalidJson, &message);
    InternalError::from_response(err, response).into()
}
