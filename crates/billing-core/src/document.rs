//! # Document Edits
//!
//! Every change the invoice screen can make to the document, as plain
//! methods on [`InvoiceDocument`].
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end action           Method                    Document change   │
//! │  ────────────────           ──────                    ───────────────   │
//! │  Add item ─────────────────► add_item() ────────────► items.push(blank) │
//! │  Edit cell ────────────────► set_item_field() ──────► items[i].f = v    │
//! │  Remove ───────────────────► remove_item() ─────────► items.remove(i)   │
//! │  VAT / shipping box ───────► set_vat_rate() ... ────► Number(raw)       │
//! │  New invoice ──────────────► start_new() ───────────► default + stamp   │
//! │  Import JSON ──────────────► merge_json() ──────────► shallow merge     │
//! │                                                                         │
//! │  After each edit the caller runs totals() and saves.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clock and random number generation stay outside this crate: stamping
//! methods take `now` and the serial as arguments.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;

use crate::coerce::coerce_str;
use crate::error::{CoreError, CoreResult};
use crate::types::{InvoiceDocument, LineItem};

/// Format of the invoice date field.
pub const INVOICE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

// =============================================================================
// Item Field
// =============================================================================

/// Editable column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Barcode,
    Description,
    Qty,
    Uom,
    UnitPrice,
    Discount,
}

impl ItemField {
    /// All columns in screen order.
    pub const ALL: [ItemField; 6] = [
        ItemField::Barcode,
        ItemField::Description,
        ItemField::Qty,
        ItemField::Uom,
        ItemField::UnitPrice,
        ItemField::Discount,
    ];

    /// Whether the column holds a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ItemField::Qty | ItemField::UnitPrice | ItemField::Discount)
    }

    /// The camelCase name used in the stored document.
    pub fn name(&self) -> &'static str {
        match self {
            ItemField::Barcode => "barcode",
            ItemField::Description => "description",
            ItemField::Qty => "qty",
            ItemField::Uom => "uom",
            ItemField::UnitPrice => "unitPrice",
            ItemField::Discount => "discount",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

// =============================================================================
// Invoice Numbers and Dates
// =============================================================================

/// Builds an invoice number: last two digits of the year, then the serial.
///
/// ## Example
/// ```rust
/// use billing_core::format_invoice_number;
///
/// assert_eq!(format_invoice_number(2026, 482913), "26482913");
/// assert_eq!(format_invoice_number(2007, 100000), "07100000");
/// ```
pub fn format_invoice_number(year: i32, serial: u32) -> String {
    format!("{:02}{}", year.rem_euclid(100), serial)
}

/// Formats a timestamp for the invoice date field.
pub fn format_invoice_date(now: DateTime<Utc>) -> String {
    now.format(INVOICE_DATE_FORMAT).to_string()
}

// =============================================================================
// Document Edits
// =============================================================================

impl InvoiceDocument {
    /// Appends a blank row.
    pub fn add_item(&mut self) -> &mut LineItem {
        self.items.push(LineItem::blank());
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Removes the row at `index`.
    ///
    /// The invoice never ends up empty: removing the last row leaves a
    /// blank row in its place.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        self.check_index(index)?;
        let removed = self.items.remove(index);

        if self.items.is_empty() {
            self.items.push(LineItem::blank());
        }

        Ok(removed)
    }

    /// Sets one cell from raw input text.
    ///
    /// Numeric columns store `Number(raw)`, so `"abc"` becomes NaN and
    /// `""` becomes 0. Text columns store `raw` unchanged.
    pub fn set_item_field(&mut self, index: usize, field: ItemField, raw: &str) -> CoreResult<()> {
        self.check_index(index)?;
        let item = &mut self.items[index];

        match field {
            ItemField::Barcode => item.barcode = raw.to_string(),
            ItemField::Description => item.description = raw.to_string(),
            ItemField::Qty => item.qty = coerce_str(raw),
            ItemField::Uom => item.uom = raw.to_string(),
            ItemField::UnitPrice => item.unit_price = coerce_str(raw),
            ItemField::Discount => item.discount = coerce_str(raw),
        }

        Ok(())
    }

    /// Sets the VAT rate from raw input text.
    pub fn set_vat_rate(&mut self, raw: &str) {
        self.vat_rate = coerce_str(raw);
    }

    /// Sets the shipping charge from raw input text.
    pub fn set_shipping(&mut self, raw: &str) {
        self.shipping = coerce_str(raw);
    }

    /// Replaces the whole document with the default one.
    pub fn reset(&mut self) {
        *self = InvoiceDocument::default();
    }

    /// Starts a new invoice: default document, dated `now`, numbered
    /// with `serial`.
    pub fn start_new(&mut self, now: DateTime<Utc>, serial: u32) {
        self.reset();
        self.invoice.date = format_invoice_date(now);
        self.invoice.number = format_invoice_number(now.year(), serial);
    }

    /// Fills in the date and number only where they are still empty.
    ///
    /// Returns `true` when anything changed.
    pub fn ensure_stamped(&mut self, now: DateTime<Utc>, serial: u32) -> bool {
        let mut changed = false;

        if self.invoice.date.is_empty() {
            self.invoice.date = format_invoice_date(now);
            changed = true;
        }

        if self.invoice.number.is_empty() {
            self.invoice.number = format_invoice_number(now.year(), serial);
            changed = true;
        }

        changed
    }

    /// Merges an imported JSON document into this one.
    ///
    /// Each top-level key of the import replaces the matching field
    /// wholesale (`customer` replaces the whole customer, `items` the whole
    /// list). Keys that are not document fields are ignored. Nothing
    /// changes when the import fails.
    pub fn merge_json(&mut self, text: &str) -> CoreResult<()> {
        let imported: Value = serde_json::from_str(text)
            .map_err(|e| CoreError::InvalidDocument(e.to_string()))?;

        let Value::Object(fields) = imported else {
            return Err(CoreError::InvalidDocument(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let mut current = serde_json::to_value(&*self)
            .map_err(|e| CoreError::InvalidDocument(e.to_string()))?;

        if let Value::Object(existing) = &mut current {
            for (key, value) in fields {
                if existing.contains_key(&key) {
                    existing.insert(key, value);
                }
            }
        }

        let merged: InvoiceDocument = serde_json::from_value(current)
            .map_err(|e| CoreError::InvalidDocument(e.to_string()))?;

        *self = merged;
        Ok(())
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::RowOutOfRange {
                row: index + 1,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
