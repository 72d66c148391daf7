//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billing-core errors (this file)                                       │
//! │  ├── CoreError        - Document edit failures                         │
//! │  └── ValidationError  - User input validation failures                 │
//! │                                                                         │
//! │  billing-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not an Error
//! The totals engine and the words renderer never fail. A NaN input yields
//! NaN totals and an empty words string. Only document edits and the
//! optional input validation layer produce these errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Document edit errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Row index does not exist.
    ///
    /// ## When This Occurs
    /// - `remove-item 4` on a three-row invoice
    /// - Editing a row after it was removed
    #[error("Row {row} does not exist (invoice has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Line item field name is not one of the editable columns.
    #[error("Unknown line item field: {0}")]
    UnknownField(String),

    /// Imported or stored text is not a usable invoice document.
    #[error("Invalid invoice document: {0}")]
    InvalidDocument(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when typed input doesn't meet requirements.
/// Used at the input boundary before values reach the document.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., text where a number was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
