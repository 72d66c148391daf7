//! # CLI Error Types
//!
//! The single error type every command returns.
//!
//! ## Error Conversion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Conversion                                     │
//! │                                                                         │
//! │  CoreError ──────┐                                                      │
//! │  ValidationError ┤                                                      │
//! │  StoreError ─────┼──► CliError { code, message } ──► stderr, exit 1     │
//! │  ConfigError ────┤                                                      │
//! │  io / serde_json ┘                                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures are logged in full and reported with a short message.

use serde::Serialize;

use billing_core::{CoreError, ValidationError};
use billing_store::StoreError;

use crate::state::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "discount must be between 0 and 100"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Row or stored value does not exist
    NotFound,

    /// User input rejected
    ValidationError,

    /// Imported or stored document could not be read
    InvalidDocument,

    /// SQLite store failed
    StorageError,

    /// Config file or environment unusable
    ConfigError,

    /// Reading or writing a file failed
    IoError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

/// Result type for commands.
pub type CliResult<T> = Result<T, CliError>;

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RowOutOfRange { .. } => CliError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::UnknownField(_) => CliError::validation(err.to_string()),
            CoreError::InvalidDocument(reason) => CliError::new(
                ErrorCode::InvalidDocument,
                format!("Invalid invoice document: {}", reason),
            ),
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => CliError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::ConnectionFailed(e) => {
                tracing::error!("Store connection failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Could not open the invoice store")
            }
            StoreError::MigrationFailed(e) => {
                tracing::error!("Store migration failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Invoice store migration failed")
            }
            StoreError::QueryFailed(e) | StoreError::Internal(e) => {
                tracing::error!("Store operation failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Invoice store operation failed")
            }
            StoreError::PoolExhausted => {
                CliError::new(ErrorCode::StorageError, "Invoice store is busy")
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("JSON output failed: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
