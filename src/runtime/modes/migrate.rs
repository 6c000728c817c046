use anyhow::{Context, Result};
use tracing::info;

use crate::config::StaticConfig;
use crate::runtime::lifetime::startup::install_crypto_provider;
use crate::storage::StorageFactory;

/// Connect once, which runs pending migrations, then close
pub async fn run_migrate(config: &StaticConfig) -> Result<()> {
    install_crypto_provider()?;

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to migrate database")?;

    info!(
        "{} schema is up to date",
        storage.backend_name().to_uppercase()
    );
    storage.close().await;
    Ok(())
}
