use std::sync::OnceLock;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads `path` (or `config.toml` when `None`) plus the environment. A
/// second call returns the configuration loaded by the first one.
pub fn init_config(path: Option<&str>) -> Result<&'static StaticConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = StaticConfig::load(path)?;
    Ok(CONFIG.get_or_init(|| loaded))
}
