//! Link management service
//!
//! Business rules for links, shared by the HTTP handlers and tests:
//! validation, alias collisions, code generation, expiry on resolve and
//! click bookkeeping. All state lives in the repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LinksConfig;
use crate::errors::{Result, SnaplinkError};
use crate::storage::{Link, LinkRepository, NewLink};
use crate::utils::{generate_random_code, is_reserved_alias, validate_alias, validate_url};

/// Fresh codes tried before giving up on a generated-code collision
const MAX_GENERATE_ATTEMPTS: usize = 5;

pub const MSG_ALIAS_EXISTS: &str = "Alias already exists";
pub const MSG_NOT_FOUND: &str = "Short URL not found";
pub const MSG_EXPIRED: &str = "Short URL has expired";

// ============ Request/Response DTOs ============

/// Request to create a new link
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    pub original_url: String,
    /// Custom code; empty is treated as absent
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Row of the recent-links listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    #[serde(rename = "shortUrl")]
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub alias: Option<String>,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
            click_count: link.click_count,
            expires_at: link.expires_at,
            alias: link.alias,
        }
    }
}

/// Details of a single link; expired links are still reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    #[serde(rename = "shortUrl")]
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkInfo {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            created_at: link.created_at,
            click_count: link.click_count,
            short_code: link.short_code,
            expires_at: link.expires_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAnalytics {
    pub click_count: i64,
    /// Newest first
    pub last_ip_addresses: Vec<String>,
}

// ============ LinkService ============

pub struct LinkService {
    storage: Arc<dyn LinkRepository>,
    settings: LinksConfig,
}

impl LinkService {
    pub fn new(storage: Arc<dyn LinkRepository>, settings: LinksConfig) -> Self {
        Self { storage, settings }
    }

    pub fn settings(&self) -> &LinksConfig {
        &self.settings
    }

    /// Create a link under the alias, or under a generated code
    pub async fn create_link(&self, req: CreateLinkRequest) -> Result<Link> {
        let original_url = req.original_url.trim().to_string();
        validate_url(&original_url).map_err(|e| SnaplinkError::validation(e.to_string()))?;

        let alias = req
            .alias
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        let created_at = Utc::now();

        if let Some(alias) = alias {
            validate_alias(&alias, self.settings.alias_max_length)
                .map_err(SnaplinkError::validation)?;

            if self.storage.alias_exists(&alias).await? {
                debug!("Alias '{}' rejected: already in use", alias);
                return Err(SnaplinkError::already_exists(MSG_ALIAS_EXISTS));
            }

            let new_link = NewLink {
                short_code: alias.clone(),
                original_url,
                alias: Some(alias),
                expires_at: req.expires_at,
                created_at,
            };

            // 并发创建同一别名时由唯一约束兜底
            return self.storage.insert_link(new_link).await.map_err(|e| match e {
                SnaplinkError::AlreadyExists(_) => SnaplinkError::already_exists(MSG_ALIAS_EXISTS),
                other => other,
            });
        }

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let code = generate_random_code(self.settings.code_length);
            if is_reserved_alias(&code) {
                continue;
            }

            // 生成的短码也不能与已有别名重名
            if self.storage.alias_exists(&code).await? {
                warn!("Generated code '{}' already in use (attempt {})", code, attempt);
                continue;
            }

            let new_link = NewLink {
                short_code: code,
                original_url: original_url.clone(),
                alias: None,
                expires_at: req.expires_at,
                created_at,
            };

            match self.storage.insert_link(new_link).await {
                Ok(link) => return Ok(link),
                Err(SnaplinkError::AlreadyExists(msg)) => {
                    warn!("{} (attempt {})", msg, attempt);
                }
                Err(e) => return Err(e),
            }
        }

        Err(SnaplinkError::database_operation(format!(
            "Could not allocate a unique short code after {} attempts",
            MAX_GENERATE_ATTEMPTS
        )))
    }

    /// Most recently created links, newest first
    pub async fn list_links(&self) -> Result<Vec<LinkSummary>> {
        let links = self.storage.list_recent(self.settings.list_limit).await?;
        Ok(links.into_iter().map(LinkSummary::from).collect())
    }

    /// Find a live link by short code or alias
    pub async fn resolve(&self, code: &str) -> Result<Link> {
        let link = self.find_or_not_found(code).await?;
        if link.is_expired() {
            debug!("Link '{}' has expired", code);
            return Err(SnaplinkError::not_found(MSG_EXPIRED));
        }
        Ok(link)
    }

    /// Count a visit. Unknown codes are ignored.
    pub async fn record_click(&self, code: &str, ip_address: &str) -> Result<()> {
        let Some(link) = self.storage.find_by_code(code).await? else {
            debug!("Click for unknown code '{}' ignored", code);
            return Ok(());
        };

        if !self.storage.record_click(link.id, ip_address).await? {
            debug!("Link '{}' vanished before the click was stored", code);
        }
        Ok(())
    }

    pub async fn info(&self, code: &str) -> Result<LinkInfo> {
        self.find_or_not_found(code).await.map(LinkInfo::from)
    }

    pub async fn delete_link(&self, code: &str) -> Result<()> {
        let link = self.find_or_not_found(code).await?;
        if !self.storage.delete_link(link.id).await? {
            return Err(SnaplinkError::not_found(MSG_NOT_FOUND));
        }
        info!("Short link '{}' deleted", link.short_code);
        Ok(())
    }

    pub async fn analytics(&self, code: &str) -> Result<LinkAnalytics> {
        let link = self.find_or_not_found(code).await?;
        let last_ip_addresses = self
            .storage
            .recent_click_ips(link.id, self.settings.analytics_recent_ips)
            .await?;

        Ok(LinkAnalytics {
            click_count: link.click_count,
            last_ip_addresses,
        })
    }

    async fn find_or_not_found(&self, code: &str) -> Result<Link> {
        self.storage
            .find_by_code(code)
            .await?
            .ok_or_else(|| SnaplinkError::not_found(MSG_NOT_FOUND))
    }
}
