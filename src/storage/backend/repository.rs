use async_trait::async_trait;

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::storage::{Link, LinkRepository, NewLink};

#[async_trait]
impl LinkRepository for SeaOrmStorage {
    async fn insert_link(&self, link: NewLink) -> Result<Link> {
        self.create_link(link).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>> {
        self.find_link_by_code(code).await
    }

    async fn alias_exists(&self, value: &str) -> Result<bool> {
        self.code_in_use(value).await
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Link>> {
        self.load_recent(limit).await
    }

    async fn record_click(&self, link_id: i32, ip_address: &str) -> Result<bool> {
        self.increment_click(link_id, ip_address).await
    }

    async fn recent_click_ips(&self, link_id: i32, limit: u64) -> Result<Vec<String>> {
        self.load_recent_ips(link_id, limit).await
    }

    async fn delete_link(&self, link_id: i32) -> Result<bool> {
        self.remove_link(link_id).await
    }

    async fn count_clicks(&self, link_id: i32) -> Result<u64> {
        self.count_click_events(link_id).await
    }
}
