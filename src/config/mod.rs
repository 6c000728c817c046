//! Configuration
//!
//! Static configuration is assembled once at startup from defaults, an
//! optional TOML file and environment variables, then shared read-only.

mod r#impl;
mod structs;

pub use r#impl::init_config;
pub use structs::*;
