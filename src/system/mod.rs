//! System-level modules
//!
//! Process-wide setup that is not specific to links: logging for now.

pub mod logging;

pub use logging::init_logging;
