use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnaplinkError {
    Validation(String),
    AlreadyExists(String),
    NotFound(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
    DateParse(String),
    Config(String),
}

impl SnaplinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::Validation(_) => "E001",
            SnaplinkError::AlreadyExists(_) => "E002",
            SnaplinkError::NotFound(_) => "E003",
            SnaplinkError::DatabaseConfig(_) => "E004",
            SnaplinkError::DatabaseConnection(_) => "E005",
            SnaplinkError::DatabaseOperation(_) => "E006",
            SnaplinkError::Serialization(_) => "E007",
            SnaplinkError::DateParse(_) => "E008",
            SnaplinkError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::Validation(_) => "Validation Error",
            SnaplinkError::AlreadyExists(_) => "Resource Already Exists",
            SnaplinkError::NotFound(_) => "Resource Not Found",
            SnaplinkError::DatabaseConfig(_) => "Database Configuration Error",
            SnaplinkError::DatabaseConnection(_) => "Database Connection Error",
            SnaplinkError::DatabaseOperation(_) => "Database Operation Error",
            SnaplinkError::Serialization(_) => "Serialization Error",
            SnaplinkError::DateParse(_) => "Date Parse Error",
            SnaplinkError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::Validation(msg)
            | SnaplinkError::AlreadyExists(msg)
            | SnaplinkError::NotFound(msg)
            | SnaplinkError::DatabaseConfig(msg)
            | SnaplinkError::DatabaseConnection(msg)
            | SnaplinkError::DatabaseOperation(msg)
            | SnaplinkError::Serialization(msg)
            | SnaplinkError::DateParse(msg)
            | SnaplinkError::Config(msg) => msg,
        }
    }

    /// HTTP status the API answers with for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            SnaplinkError::Validation(_)
            | SnaplinkError::AlreadyExists(_)
            | SnaplinkError::DateParse(_) => StatusCode::BAD_REQUEST,
            SnaplinkError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the message can be shown to API clients as-is
    ///
    /// Infrastructure failures are logged with full detail but answered
    /// with a generic message.
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SnaplinkError {}

// 便捷的构造函数
impl SnaplinkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Validation(msg.into())
    }

    pub fn already_exists<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::AlreadyExists(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::NotFound(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DateParse(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for SnaplinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        SnaplinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SnaplinkError {
    fn from(err: serde_json::Error) -> Self {
        SnaplinkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SnaplinkError {
    fn from(err: chrono::ParseError) -> Self {
        SnaplinkError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for SnaplinkError {
    fn from(err: config::ConfigError) -> Self {
        SnaplinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            SnaplinkError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SnaplinkError::already_exists("dup").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SnaplinkError::not_found("gone").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SnaplinkError::database_operation("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SnaplinkError::config("bad toml").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_error_flag() {
        assert!(SnaplinkError::validation("x").is_client_error());
        assert!(SnaplinkError::not_found("x").is_client_error());
        assert!(!SnaplinkError::database_connection("x").is_client_error());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = SnaplinkError::not_found("Short URL not found");
        assert_eq!(err.to_string(), "Resource Not Found: Short URL not found");
        assert_eq!(err.message(), "Short URL not found");
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_from_db_err() {
        let err: SnaplinkError = sea_orm::DbErr::Custom("disk full".into()).into();
        assert!(matches!(err, SnaplinkError::DatabaseOperation(_)));
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::DateTime::parse_from_rfc3339("nope").unwrap_err();
        let err: SnaplinkError = parse_err.into();
        assert!(matches!(err, SnaplinkError::DateParse(_)));
    }
}
