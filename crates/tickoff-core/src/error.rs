//! Error types and exit codes for tickoff
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (host I/O, serialization)
//! - 2: Usage error (bad flags/args, invalid setting values)
//! - 3: Data error (target note cannot be resolved)
//!
//! The rewrite passes in [`crate::todo`] never return errors; only the host
//! boundary (resolve/read/write) and configuration handling can fail.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tickoff binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unresolvable note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during tickoff operations
#[derive(Error, Debug)]
pub enum TickoffError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unknown setting: {key} (expected one of: {supported})")]
    UnknownSetting { key: String, supported: String },

    // Data errors (exit code 3)
    #[error("note not found: {identifier}")]
    DocumentNotFound { identifier: String },

    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl TickoffError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TickoffError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TickoffError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an identifier that does not resolve to a note
    pub fn document_not_found(identifier: impl std::fmt::Display) -> Self {
        TickoffError::DocumentNotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TickoffError::UsageError(_)
            | TickoffError::InvalidValue { .. }
            | TickoffError::UnknownSetting { .. } => ExitCode::Usage,

            TickoffError::DocumentNotFound { .. } | TickoffError::VaultNotFound { .. } => {
                ExitCode::Data
            }

            TickoffError::Io(_)
            | TickoffError::Json(_)
            | TickoffError::Toml(_)
            | TickoffError::TomlSer(_)
            | TickoffError::FailedOperationWithTarget { .. }
            | TickoffError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TickoffError::UsageError(_) => "usage_error",
            TickoffError::InvalidValue { .. } => "invalid_value",
            TickoffError::UnknownSetting { .. } => "unknown_setting",
            TickoffError::DocumentNotFound { .. } => "document_not_found",
            TickoffError::VaultNotFound { .. } => "vault_not_found",
            TickoffError::Io(_) => "io_error",
            TickoffError::Json(_) => "json_error",
            TickoffError::Toml(_) => "toml_error",
            TickoffError::TomlSer(_) => "toml_error",
            TickoffError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            TickoffError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for tickoff operations
pub type Result<T> = std::result::Result<T, TickoffError>;
