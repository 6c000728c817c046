use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parser for the `expiresAt` field
///
/// Accepted shapes:
/// - RFC 3339: `2030-01-01T12:00:00Z`, `2030-01-01T12:00:00+08:00`
/// - naive date-time (HTML `datetime-local`): `2030-01-01T12:00`,
///   `2030-01-01T12:00:00`, `2030-01-01T12:00:00.250`, read as UTC
/// - plain date: `2030-01-01`, midnight UTC
pub struct TimeParser;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

impl TimeParser {
    pub fn parse_expires_at(input: &str) -> Result<DateTime<Utc>, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("expiresAt must not be empty".to_string());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        // 无时区信息时按 UTC 处理
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
                return Ok(naive.and_utc());
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            && let Some(midnight) = date.and_hms_opt(0, 0, 0)
        {
            return Ok(midnight.and_utc());
        }

        Err(format!(
            "expiresAt must be a valid ISO 8601 date string, got: '{}'",
            input
        ))
    }
}
