pub mod ip;
pub mod time_parser;
pub mod url_validator;

pub use time_parser::TimeParser;
pub use url_validator::{UrlValidationError, validate_url};

/// 短码字母表：大小写字母 + 数字
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// First path segments already taken by fixed routes; a link under one of
/// these names could never be reached through `GET /{code}`.
pub const RESERVED_ALIASES: &[&str] = &[
    "shorten",
    "favicon.ico",
    "api",
    "info",
    "delete",
    "analytics",
    "assets",
];

/// 检查是否与固定路由冲突
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Check a user-chosen alias
///
/// An alias must fit in one URL path segment, so it is limited to ASCII
/// letters, digits, `-`, `_` and `.`, and to `max_len` characters. Names
/// of fixed routes are refused.
pub fn validate_alias(alias: &str, max_len: usize) -> Result<(), String> {
    if alias.is_empty() {
        return Err("alias must not be empty".to_string());
    }

    if alias.chars().count() > max_len {
        return Err(format!(
            "alias must be shorter than or equal to {} characters",
            max_len
        ));
    }

    if alias == "." || alias == ".." {
        return Err("alias must not be a relative path segment".to_string());
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(
            "alias may only contain letters, digits, '-', '_' and '.'".to_string(),
        );
    }

    if is_reserved_alias(alias) {
        return Err(format!("alias '{}' conflicts with a reserved route", alias));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_random_code_length_and_alphabet() {
        for len in [0, 1, 8, 32] {
            let code = generate_random_code(len);
            assert_eq!(code.len(), len);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_random_code_varies() {
        let codes: HashSet<String> = (0..200).map(|_| generate_random_code(8)).collect();
        // 62^8 的空间里 200 次抽样几乎不可能重复
        assert!(codes.len() > 190);
    }

    #[test]
    fn test_validate_alias_accepts_path_safe_names() {
        assert!(validate_alias("mine", 20).is_ok());
        assert!(validate_alias("my-link_v2.0", 20).is_ok());
        assert!(validate_alias(&"a".repeat(20), 20).is_ok());
    }

    #[test]
    fn test_validate_alias_length() {
        let err = validate_alias(&"a".repeat(21), 20).unwrap_err();
        assert!(err.contains("20"));
        assert!(validate_alias("", 20).is_err());
    }

    #[test]
    fn test_validate_alias_charset() {
        assert!(validate_alias("a/b", 20).is_err());
        assert!(validate_alias("with space", 20).is_err());
        assert!(validate_alias("ümlaut", 20).is_err());
        assert!(validate_alias("..", 20).is_err());
        assert!(validate_alias("a?b", 20).is_err());
    }

    #[test]
    fn test_validate_alias_reserved_routes() {
        for reserved in RESERVED_ALIASES {
            let err = validate_alias(reserved, 20).unwrap_err();
            assert!(err.contains("reserved"), "{} 应被拒绝", reserved);
        }
        // 路由区分大小写，只拦截完全相同的名字
        assert!(validate_alias("Shorten", 20).is_ok());
        assert!(validate_alias("info2", 20).is_ok());
    }
}
