use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::StaticConfig;

pub const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

/// Write the default configuration as TOML
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn generate_config(output_path: Option<&str>, force: bool) -> Result<String> {
    let path = output_path.unwrap_or(DEFAULT_SAMPLE_PATH);

    if Path::new(path).exists() && !force {
        bail!("{} already exists, use --force to overwrite", path);
    }

    StaticConfig::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path))?;

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_config_respects_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("snaplink.toml");
        let path_str = path.to_str().unwrap();

        assert_eq!(generate_config(Some(path_str), false).unwrap(), path_str);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[database]"));

        assert!(generate_config(Some(path_str), false).is_err());
        assert!(generate_config(Some(path_str), true).is_ok());
    }
}
