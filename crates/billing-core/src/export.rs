//! # Export Shapes
//!
//! Builds the text of the CSV and JSON downloads. Writing the text
//! somewhere is the caller's job.
//!
//! ## CSV Layout
//! ```text
//! Barcode,Description,Qty,UOM,Unit Price,Discount %,Amount
//! 1078068,Stripe Polo T-Shirt Size M,1,PCS,2790,35,1813.50
//! ```
//! - One row per line item, rows joined by `\n`, no trailing newline
//! - Input columns are written as entered (`1`, not `1.00`)
//! - `Amount` is the computed line amount with two decimals
//! - A cell containing `,` or `"` is quoted, inner quotes doubled

use crate::error::{CoreError, CoreResult};
use crate::format::{format_amount, format_number};
use crate::types::InvoiceDocument;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 7] = [
    "Barcode",
    "Description",
    "Qty",
    "UOM",
    "Unit Price",
    "Discount %",
    "Amount",
];

/// Quotes a CSV cell when it contains a comma or a double quote.
///
/// Newlines alone do not trigger quoting, matching the browser export.
pub fn csv_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the line items as CSV.
///
/// ## Example
/// ```rust
/// use billing_core::export::to_csv;
/// use billing_core::InvoiceDocument;
///
/// let csv = to_csv(&InvoiceDocument::default());
/// assert_eq!(
///     csv.lines().nth(1),
///     Some("1078068,Stripe Polo T-Shirt Size M,1,PCS,2790,35,1813.50")
/// );
/// ```
pub fn to_csv(document: &InvoiceDocument) -> String {
    let header = CSV_HEADER.iter().map(|cell| csv_cell(cell)).collect::<Vec<_>>();

    let rows = document.items.iter().map(|item| {
        [
            item.barcode.clone(),
            item.description.clone(),
            format_number(item.qty),
            item.uom.clone(),
            format_number(item.unit_price),
            format_number(item.discount),
            format_amount(item.amount()),
        ]
        .iter()
        .map(|cell| csv_cell(cell))
        .collect::<Vec<_>>()
    });

    std::iter::once(header)
        .chain(rows)
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the whole document as pretty JSON (two-space indent).
pub fn to_json(document: &InvoiceDocument) -> CoreResult<String> {
    serde_json::to_string_pretty(document).map_err(|e| CoreError::InvalidDocument(e.to_string()))
}

/// Parses a complete stored document.
pub fn parse_document(text: &str) -> CoreResult<InvoiceDocument> {
    serde_json::from_str(text).map_err(|e| CoreError::InvalidDocument(e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
