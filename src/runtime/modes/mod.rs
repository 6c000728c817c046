//! Mode routing
//!
//! - `serve`: HTTP server (default)
//! - `migrate`: apply schema migrations and exit
//! - `config generate`: write a sample configuration file

pub mod config;
pub mod migrate;
pub mod server;

pub use config::generate_config;
pub use migrate::run_migrate;
pub use server::run_server;
