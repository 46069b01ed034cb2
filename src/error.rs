//! Error handling for pivot-forge
//!
//! The analysis core never fails; errors only come from configuration and
//! the command line front end.

use thiserror::Error;

/// Main error type for pivot-forge
#[derive(Error, Debug, Clone)]
pub enum PivotForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl PivotForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!(
                "❌ Configuration problem: {}\n💡 Check your .env file or PIVOT_FORGE_* variables",
                message
            ),
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Parse { message } => {
                format!("❌ Parse error: {}\n💡 Check the value you passed", message)
            }
            Self::Io { message } => format!("❌ Output error: {}", message),
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<serde_json::Error> for PivotForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<std::io::Error> for PivotForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<inquire::InquireError> for PivotForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::cli(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PivotForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PivotForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PivotForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! cli_error {
    ($msg:expr) => {
        $crate::error::PivotForgeError::cli($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PivotForgeError::cli(format!($fmt, $($arg)*))
    };
}
