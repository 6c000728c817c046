use async_trait::async_trait;

use super::models::{Link, NewLink};
use crate::errors::Result;

/// Persistence operations the link service depends on
///
/// Lookups by "code" match either the `short_code` column or the `alias`
/// column in a single query.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Insert a link; a clash on a unique column yields `AlreadyExists`
    async fn insert_link(&self, link: NewLink) -> Result<Link>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>>;

    /// Whether `value` is already used as a short code or an alias
    async fn alias_exists(&self, value: &str) -> Result<bool>;

    /// Newest links first, at most `limit`
    async fn list_recent(&self, limit: u64) -> Result<Vec<Link>>;

    /// Bump the counter and store a click event atomically.
    /// Returns `false` when the link no longer exists.
    async fn record_click(&self, link_id: i32, ip_address: &str) -> Result<bool>;

    /// Most recent click IPs first, at most `limit`
    async fn recent_click_ips(&self, link_id: i32, limit: u64) -> Result<Vec<String>>;

    /// Remove the link and its click events. Returns `false` if nothing was deleted.
    async fn delete_link(&self, link_id: i32) -> Result<bool>;

    async fn count_clicks(&self, link_id: i32) -> Result<u64>;
}
