//! API 请求与响应类型

use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;
use crate::errors::SnaplinkError;
use crate::services::CreateLinkRequest;
use crate::utils::{TimeParser, validate_alias, validate_url};

/// Error body returned by every failing endpoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// `POST /shorten` body
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl ShortenRequest {
    /// Check the payload shape and turn it into a service request
    ///
    /// Every problem found is reported, joined with `"; "`.
    pub fn validate(self, alias_max_length: usize) -> Result<CreateLinkRequest, SnaplinkError> {
        let mut problems: Vec<String> = Vec::new();

        let original_url = self.original_url.unwrap_or_default().trim().to_string();
        if original_url.is_empty() {
            problems.push("originalUrl should not be empty".to_string());
        } else if let Err(e) = validate_url(&original_url) {
            problems.push(e.to_string());
        }

        let alias = self.alias.filter(|a| !a.trim().is_empty());
        if let Some(ref alias) = alias
            && let Err(e) = validate_alias(alias.trim(), alias_max_length)
        {
            problems.push(e);
        }

        let expires_at = match self.expires_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match TimeParser::parse_expires_at(raw) {
                Ok(dt) => Some(dt),
                Err(e) => {
                    problems.push(e);
                    None
                }
            },
        };

        if !problems.is_empty() {
            return Err(SnaplinkError::validation(problems.join("; ")));
        }

        Ok(CreateLinkRequest {
            original_url,
            alias,
            expires_at,
        })
    }
}

/// `POST /shorten` response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    /// Full public URL, base URL + code
    pub short_url: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: Option<&str>, alias: Option<&str>, expires: Option<&str>) -> ShortenRequest {
        ShortenRequest {
            original_url: url.map(String::from),
            alias: alias.map(String::from),
            expires_at: expires.map(String::from),
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request(
            Some("https://example.com"),
            Some("myalias"),
            Some("2030-01-01T00:00"),
        )
        .validate(20)
        .unwrap();
        assert_eq!(req.original_url, "https://example.com");
        assert_eq!(req.alias.as_deref(), Some("myalias"));
        assert!(req.expires_at.is_some());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let req = request(Some("https://example.com"), Some("  "), Some(""))
            .validate(20)
            .unwrap();
        assert!(req.alias.is_none());
        assert!(req.expires_at.is_none());
    }

    #[test]
    fn test_collects_all_problems() {
        let err = request(Some("ftp://x"), Some(&"a".repeat(21)), Some("soon"))
            .validate(20)
            .unwrap_err();
        let SnaplinkError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(msg.matches("; ").count(), 2);
        assert!(msg.contains("http"));
        assert!(msg.contains("20"));
        assert!(msg.contains("expiresAt"));
    }

    #[test]
    fn test_missing_url() {
        let err = request(None, None, None).validate(20).unwrap_err();
        assert_eq!(err.message(), "originalUrl should not be empty");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let req: ShortenRequest = serde_json::from_str(
            r#"{"originalUrl":"https://example.com","alias":"x","expiresAt":"2030-01-01"}"#,
        )
        .unwrap();
        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
        assert_eq!(req.expires_at.as_deref(), Some("2030-01-01"));
    }
}
