//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::SnaplinkError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 1000-1099: 通用错误
/// - 3000-3099: 链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    InvalidJson = 1001,
    NotFound = 1004,
    InternalServerError = 1005,
    InvalidDateFormat = 1012,

    // 链接错误 3000-3099
    LinkNotFound = 3000,
    LinkAlreadyExists = 3001,
    LinkValidationFailed = 3002,
}

impl From<&SnaplinkError> for ErrorCode {
    fn from(err: &SnaplinkError) -> Self {
        match err {
            SnaplinkError::Validation(_) => ErrorCode::LinkValidationFailed,
            SnaplinkError::AlreadyExists(_) => ErrorCode::LinkAlreadyExists,
            SnaplinkError::NotFound(_) => ErrorCode::LinkNotFound,
            SnaplinkError::DateParse(_) => ErrorCode::InvalidDateFormat,
            SnaplinkError::Serialization(_) => ErrorCode::BadRequest,
            SnaplinkError::DatabaseConfig(_)
            | SnaplinkError::DatabaseConnection(_)
            | SnaplinkError::DatabaseOperation(_)
            | SnaplinkError::Config(_) => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::LinkAlreadyExists).unwrap(),
            "3001"
        );
        let parsed: ErrorCode = serde_json::from_str("1001").unwrap();
        assert_eq!(parsed, ErrorCode::InvalidJson);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ErrorCode::from(&SnaplinkError::not_found("x")),
            ErrorCode::LinkNotFound
        );
        assert_eq!(
            ErrorCode::from(&SnaplinkError::validation("x")),
            ErrorCode::LinkValidationFailed
        );
        assert_eq!(
            ErrorCode::from(&SnaplinkError::database_connection("x")),
            ErrorCode::InternalServerError
        );
    }
}
