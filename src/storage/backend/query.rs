//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::{model_to_click_event, model_to_link};
use crate::errors::{Result, SnaplinkError};
use crate::storage::{ClickEvent, Link};

use migration::entities::{click_event, link};

/// short_code = value OR alias = value
fn code_or_alias(value: &str) -> Condition {
    Condition::any()
        .add(link::Column::ShortCode.eq(value))
        .add(link::Column::Alias.eq(value))
}

impl SeaOrmStorage {
    pub async fn find_link_by_code(&self, code: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(code_or_alias(code))
            .order_by_asc(link::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| SnaplinkError::database_operation(format!("Failed to look up link: {}", e)))?;

        trace!("Lookup for '{}' found: {}", code, model.is_some());
        Ok(model.map(model_to_link))
    }

    pub async fn code_in_use(&self, value: &str) -> Result<bool> {
        let count = link::Entity::find()
            .filter(code_or_alias(value))
            .count(&self.db)
            .await
            .map_err(|e| {
                SnaplinkError::database_operation(format!("Failed to check alias: {}", e))
            })?;
        Ok(count > 0)
    }

    /// 按创建时间倒序，同一时间按 id 倒序
    pub async fn load_recent(&self, limit: u64) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .order_by_desc(link::Column::CreatedAt)
            .order_by_desc(link::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SnaplinkError::database_operation(format!("Failed to list links: {}", e)))?;

        Ok(models.into_iter().map(model_to_link).collect())
    }

    pub async fn load_recent_ips(&self, link_id: i32, limit: u64) -> Result<Vec<String>> {
        click_event::Entity::find()
            .select_only()
            .column(click_event::Column::IpAddress)
            .filter(click_event::Column::LinkId.eq(link_id))
            .order_by_desc(click_event::Column::ClickedAt)
            .order_by_desc(click_event::Column::Id)
            .limit(limit)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| {
                SnaplinkError::database_operation(format!("Failed to load click events: {}", e))
            })
    }

    /// Click events of a link, newest first
    pub async fn load_click_events(&self, link_id: i32, limit: u64) -> Result<Vec<ClickEvent>> {
        let models = click_event::Entity::find()
            .filter(click_event::Column::LinkId.eq(link_id))
            .order_by_desc(click_event::Column::ClickedAt)
            .order_by_desc(click_event::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                SnaplinkError::database_operation(format!("Failed to load click events: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_click_event).collect())
    }

    pub async fn count_click_events(&self, link_id: i32) -> Result<u64> {
        click_event::Entity::find()
            .filter(click_event::Column::LinkId.eq(link_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                SnaplinkError::database_operation(format!("Failed to count click events: {}", e))
            })
    }
}
