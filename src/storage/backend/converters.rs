use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::{ClickEvent, Link, NewLink};
use migration::entities::{click_event, link};

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        short_code: model.short_code,
        original_url: model.original_url,
        alias: model.alias,
        expires_at: model.expires_at,
        created_at: model.created_at,
        click_count: i64::from(model.click_count.max(0)),
    }
}

/// 新链接的 ActiveModel，id 由数据库生成，计数从 0 开始
pub fn new_link_to_active_model(link: &NewLink) -> link::ActiveModel {
    link::ActiveModel {
        id: NotSet,
        short_code: Set(link.short_code.clone()),
        original_url: Set(link.original_url.clone()),
        alias: Set(link.alias.clone()),
        expires_at: Set(link.expires_at),
        created_at: Set(link.created_at),
        click_count: Set(0),
    }
}

pub fn model_to_click_event(model: click_event::Model) -> ClickEvent {
    ClickEvent {
        id: model.id,
        link_id: model.link_id,
        ip_address: model.ip_address,
        clicked_at: model.clicked_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::ActiveValue;

    #[test]
    fn test_model_to_link_maps_every_field() {
        let now = Utc::now();
        let model = link::Model {
            id: 7,
            short_code: "mine".to_string(),
            original_url: "https://example.com/x".to_string(),
            alias: Some("mine".to_string()),
            expires_at: Some(now + Duration::days(1)),
            created_at: now,
            click_count: 3,
        };

        let link = model_to_link(model);
        assert_eq!(link.id, 7);
        assert_eq!(link.short_code, "mine");
        assert_eq!(link.alias.as_deref(), Some("mine"));
        assert_eq!(link.created_at, now);
        assert_eq!(link.click_count, 3);
    }

    #[test]
    fn test_negative_counter_clamped() {
        let model = link::Model {
            id: 1,
            short_code: "c".to_string(),
            original_url: "https://example.com".to_string(),
            alias: None,
            expires_at: None,
            created_at: Utc::now(),
            click_count: -4,
        };
        assert_eq!(model_to_link(model).click_count, 0);
    }

    #[test]
    fn test_new_link_active_model() {
        let new_link = NewLink {
            short_code: "Ab3dE9xQ".to_string(),
            original_url: "https://example.com".to_string(),
            alias: None,
            expires_at: None,
            created_at: Utc::now(),
        };

        let active = new_link_to_active_model(&new_link);
        assert!(matches!(active.id, ActiveValue::NotSet));
        assert!(matches!(active.click_count, ActiveValue::Set(0)));
        assert!(matches!(active.alias, ActiveValue::Set(None)));
        if let ActiveValue::Set(code) = active.short_code {
            assert_eq!(code, "Ab3dE9xQ");
        } else {
            panic!("short_code should be set");
        }
    }

    #[test]
    fn test_model_to_click_event() {
        let now = Utc::now();
        let event = model_to_click_event(click_event::Model {
            id: 11,
            link_id: 2,
            ip_address: "203.0.113.5".to_string(),
            clicked_at: now,
        });
        assert_eq!(event.link_id, 2);
        assert_eq!(event.ip_address, "203.0.113.5");
        assert_eq!(event.clicked_at, now);
    }
}
