//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_mystery_shopper_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MysteryShopperError {
            $($variant(String),)*
        }

        impl MysteryShopperError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MysteryShopperError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MysteryShopperError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MysteryShopperError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl MysteryShopperError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MysteryShopperError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_mystery_shopper_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
}

impl MysteryShopperError {
    /// 是否为资源不存在错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, MysteryShopperError::NotFound(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MysteryShopperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MysteryShopperError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for MysteryShopperError {
    fn from(err: sea_orm::DbErr) -> Self {
        MysteryShopperError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for MysteryShopperError {
    fn from(err: std::io::Error) -> Self {
        MysteryShopperError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MysteryShopperError {
    fn from(err: serde_json::Error) -> Self {
        MysteryShopperError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for MysteryShopperError {
    fn from(err: chrono::ParseError) -> Self {
        MysteryShopperError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MysteryShopperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MysteryShopperError::database_config("test").code(), "E001");
        assert_eq!(MysteryShopperError::database_operation("test").code(), "E003");
        assert_eq!(MysteryShopperError::validation("test").code(), "E005");
        assert_eq!(MysteryShopperError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MysteryShopperError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            MysteryShopperError::date_parse("test").error_type(),
            "Date Parse Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = MysteryShopperError::not_found("Asignación 42 no encontrada");
        assert_eq!(err.message(), "Asignación 42 no encontrada");
        assert!(err.is_not_found());
        assert!(!MysteryShopperError::validation("x").is_not_found());
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("2025-13-40", "%Y-%m-%d").unwrap_err();
        let err: MysteryShopperError = parse_err.into();
        assert_eq!(err.code(), "E008");
    }

    #[test]
    fn test_format_simple() {
        let err = MysteryShopperError::validation("Invalid slug");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid slug"));
    }
}
