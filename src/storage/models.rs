use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored short link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i32,
    pub short_code: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// 过期判断：expires_at 早于 now 即视为过期
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Insert payload for a link; the store assigns `id` and the counter starts at 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One recorded redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub id: i32,
    pub link_id: i32,
    pub ip_address: String,
    pub clicked_at: DateTime<Utc>,
}
