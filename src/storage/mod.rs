use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
mod traits;

pub use backend::SeaOrmStorage;
pub use models::{ClickEvent, Link, NewLink};
pub use traits::LinkRepository;

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let database_url = config.connection_url()?;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&database_url)?;

        let storage = SeaOrmStorage::new(&database_url, &backend_type, config.pool_size).await?;
        Ok(Arc::new(storage))
    }
}
