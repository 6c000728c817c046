//! Snaplink - A small URL shortener service
//!
//! Short codes and custom aliases over a relational store (SQLite, MySQL or
//! PostgreSQL via SeaORM), with optional expiry, click counting and per-click
//! IP logging. Served as a JSON API plus an embedded browser client.
//!
//! # Architecture
//! - `api`: HTTP handlers, routes and the embedded web client
//! - `services`: link business rules
//! - `storage`: SeaORM repository and migrations
//! - `config`: TOML + environment configuration
//! - `runtime`: startup, shutdown and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
