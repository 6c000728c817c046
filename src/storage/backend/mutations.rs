//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    SqlErr, TransactionTrait,
};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{model_to_link, new_link_to_active_model};
use crate::errors::{Result, SnaplinkError};
use crate::storage::{Link, NewLink};

use migration::entities::{click_event, link};

fn txn_error(stage: &str, e: DbErr) -> SnaplinkError {
    SnaplinkError::database_operation(format!("{}: {}", stage, e))
}

impl SeaOrmStorage {
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link> {
        let model = new_link_to_active_model(&new_link)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => SnaplinkError::already_exists(
                    format!("Short code already exists: {}", new_link.short_code),
                ),
                _ => SnaplinkError::database_operation(format!("Failed to insert link: {}", e)),
            })?;

        info!("Short link created: {} -> {}", model.short_code, model.original_url);
        Ok(model_to_link(model))
    }

    /// 计数 +1 与写入点击事件在同一事务中完成
    pub async fn increment_click(&self, link_id: i32, ip_address: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| txn_error("Failed to begin transaction", e))?;

        let updated = link::Entity::update_many()
            .col_expr(
                link::Column::ClickCount,
                Expr::col(link::Column::ClickCount).add(1),
            )
            .filter(link::Column::Id.eq(link_id))
            .exec(&txn)
            .await
            .map_err(|e| txn_error("Failed to increment click count", e))?;

        if updated.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| txn_error("Failed to roll back transaction", e))?;
            debug!("Click for missing link id {} ignored", link_id);
            return Ok(false);
        }

        click_event::ActiveModel {
            link_id: Set(link_id),
            ip_address: Set(ip_address.to_string()),
            clicked_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| txn_error("Failed to insert click event", e))?;

        txn.commit()
            .await
            .map_err(|e| txn_error("Failed to commit transaction", e))?;

        Ok(true)
    }

    /// 先删点击事件再删链接，同一事务
    pub async fn remove_link(&self, link_id: i32) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| txn_error("Failed to begin transaction", e))?;

        let events = click_event::Entity::delete_many()
            .filter(click_event::Column::LinkId.eq(link_id))
            .exec(&txn)
            .await
            .map_err(|e| txn_error("Failed to delete click events", e))?;

        let deleted = link::Entity::delete_by_id(link_id)
            .exec(&txn)
            .await
            .map_err(|e| txn_error("Failed to delete link", e))?;

        txn.commit()
            .await
            .map_err(|e| txn_error("Failed to commit transaction", e))?;

        if deleted.rows_affected > 0 {
            info!(
                "Short link {} deleted together with {} click events",
                link_id, events.rows_affected
            );
        }
        Ok(deleted.rows_affected > 0)
    }
}
