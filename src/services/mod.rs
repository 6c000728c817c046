//! Service layer for business logic
//!
//! Shared by the HTTP handlers and integration tests.

mod link_service;

pub use link_service::*;
