//! Target URL validation
//!
//! A link target must be an absolute `http`/`https` URL with a host.
//! Script-capable schemes are reported separately so the message is clear.

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    DangerousScheme(String),
    UnsupportedScheme(String),
    MissingHost,
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "originalUrl must not be empty"),
            Self::DangerousScheme(scheme) => {
                write!(f, "originalUrl uses a blocked scheme: {}", scheme)
            }
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "originalUrl must use http or https, got: {}",
                scheme
            ),
            Self::MissingHost => write!(f, "originalUrl must include a host"),
            Self::Malformed(reason) => write!(f, "originalUrl must be a URL address: {}", reason),
        }
    }
}

impl std::error::Error for UrlValidationError {}

const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// 校验目标 URL，成功时返回解析后的 `Url`
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    // 先看 scheme，避免 `javascript:` 之类被当成普通解析错误
    if let Some((scheme, _)) = raw.split_once(':') {
        let scheme = scheme.to_ascii_lowercase();
        if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
            return Err(UrlValidationError::DangerousScheme(scheme));
        }
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://example.com/a/very/long/path").is_ok());
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("HTTPS://Example.com/?q=1#frag").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(UrlValidationError::EmptyUrl));
    }

    #[test]
    fn test_rejects_script_schemes() {
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
        assert!(matches!(
            validate_url("DATA:text/html,hi"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            validate_url("mailto:someone@example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::Malformed(_))
        ));
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::Malformed(_))
        ));
    }
}
