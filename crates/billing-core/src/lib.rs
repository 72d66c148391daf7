//! # billing-core: Pure Business Logic for the Invoice Builder
//!
//! This crate is the **heart** of the billing workspace. It contains the
//! totals engine, the amount-in-words renderer and the invoice document model
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Billing Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    billing-cli (commands)                       │   │
//! │  │    add-item, edit-item, tax, print, export-csv, import-json     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ billing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │   words   │  │  export   │  │   │
//! │  │   │ LineItem  │  │ Engine    │  │ NumberW.  │  │ CSV/JSON  │  │   │
//! │  │   │ Document  │  │ Totals    │  │ AmountW.  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 billing-store (Persistence)                     │   │
//! │  │              SQLite key/value state, migrations                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Document types (LineItem, Customer, InvoiceDocument, etc.)
//! - [`totals`] - Line calculator and totals engine
//! - [`words`] - Number and amount to English words
//! - [`document`] - Document edits (add/remove rows, import merge, stamping)
//! - [`export`] - CSV and JSON export shapes
//! - [`coerce`] - Lenient numeric coercion for stored and imported values
//! - [`format`] - Two-decimal display formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for user-entered values
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **No I/O**: Database, network, file system, clock access is FORBIDDEN here
//! 3. **Fail Soft Engine**: totals never error; NaN propagates, words go empty
//! 4. **Explicit Errors**: document edits return typed errors, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use billing_core::{compute_totals, LineItem};
//!
//! let items = vec![LineItem {
//!     qty: 1.0,
//!     unit_price: 2790.0,
//!     discount: 35.0,
//!     ..LineItem::blank()
//! }];
//!
//! let totals = compute_totals(&items, 0.0, 0.0);
//! assert_eq!(totals.sub_total, 1813.5);
//! assert_eq!(
//!     totals.total_in_words,
//!     "one thousand eight hundred thirteen taka and fifty paisa"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coerce::coerce_number;
pub use document::{format_invoice_number, ItemField};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{format_amount, format_number};
pub use totals::{calculate_line, compute_totals, InvoiceTotals, TaxParameters};
pub use types::*;
pub use words::{amount_to_words, number_to_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Key the document is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "billing-app-state";

/// Unit of measure given to new rows.
pub const DEFAULT_UOM: &str = "PCS";

/// Payment type of a fresh invoice (cash on delivery).
pub const DEFAULT_PAYMENT_TYPE: &str = "COD";

/// VAT percentage of a fresh invoice.
pub const DEFAULT_VAT_RATE: f64 = 10.0;

/// Terms printed at the foot of a fresh invoice.
pub const DEFAULT_TERMS: &str =
    "Items purchased can be exchanged within 7 days. Invoice & tag must be intact.";

/// Smallest serial used in generated invoice numbers.
pub const MIN_INVOICE_SERIAL: u32 = 100_000;

/// Largest serial used in generated invoice numbers.
pub const MAX_INVOICE_SERIAL: u32 = 999_999;
