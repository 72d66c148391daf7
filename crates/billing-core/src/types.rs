//! # Document Types
//!
//! The invoice document as it is edited, persisted and exported.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       InvoiceDocument                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │   InvoiceMeta   │   │  LineItem (Vec) │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  date           │   │  barcode        │       │
//! │  │  address        │   │  number         │   │  description    │       │
//! │  │  phone          │   │  paymentType    │   │  qty, uom       │       │
//! │  └─────────────────┘   └─────────────────┘   │  unitPrice      │       │
//! │                                              │  discount (%)   │       │
//! │  vatRate (%)   shipping (flat)   terms       └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Line items have no id. A row is its position in `items`.
//!
//! ## Wire Shape
//! Field names are camelCase, exactly as the browser stored them, so a
//! document exported from the browser imports here unchanged and the
//! other way round.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coerce::{lenient_number, lenient_text, missing_number};
use crate::totals::{calculate_line, compute_totals, InvoiceTotals};
use crate::{DEFAULT_PAYMENT_TYPE, DEFAULT_TERMS, DEFAULT_UOM, DEFAULT_VAT_RATE};

// =============================================================================
// Line Item
// =============================================================================

/// One row of the invoice.
///
/// Numbers are kept as `f64` on purpose: the totals engine reproduces the
/// screen's floating point arithmetic, NaN included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product barcode (free text).
    #[serde(default, deserialize_with = "lenient_text")]
    pub barcode: String,

    /// Product or service description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,

    /// Quantity, ≥ 0 by convention.
    #[serde(default = "missing_number", deserialize_with = "lenient_number")]
    pub qty: f64,

    /// Unit of measure ("PCS", "KG", ...).
    #[serde(default, deserialize_with = "lenient_text")]
    pub uom: String,

    /// Price of one unit.
    #[serde(default = "missing_number", deserialize_with = "lenient_number")]
    pub unit_price: f64,

    /// Percentage discount, 0..=100 by convention (not enforced).
    #[serde(default = "missing_number", deserialize_with = "lenient_number")]
    pub discount: f64,
}

impl LineItem {
    /// The empty row appended by "add item".
    pub fn blank() -> Self {
        LineItem {
            barcode: String::new(),
            description: String::new(),
            qty: 1.0,
            uom: DEFAULT_UOM.to_string(),
            unit_price: 0.0,
            discount: 0.0,
        }
    }

    /// The sample row a fresh invoice starts with.
    pub fn sample() -> Self {
        LineItem {
            barcode: "1078068".to_string(),
            description: "Stripe Polo T-Shirt Size M".to_string(),
            qty: 1.0,
            uom: DEFAULT_UOM.to_string(),
            unit_price: 2790.0,
            discount: 35.0,
        }
    }

    /// Net amount of this row after discount.
    #[inline]
    pub fn amount(&self) -> f64 {
        calculate_line(self)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Who the invoice is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
}

// =============================================================================
// Invoice Metadata
// =============================================================================

/// Invoice header fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMeta {
    /// Issue date, `YYYY-MM-DDTHH:MM`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,

    /// Invoice number, two-digit year followed by a six-digit serial.
    #[serde(default, deserialize_with = "lenient_text")]
    pub number: String,

    /// Payment type, e.g. "COD".
    #[serde(default = "default_payment_type", deserialize_with = "lenient_text")]
    pub payment_type: String,
}

fn default_payment_type() -> String {
    DEFAULT_PAYMENT_TYPE.to_string()
}

impl Default for InvoiceMeta {
    fn default() -> Self {
        InvoiceMeta {
            date: String::new(),
            number: String::new(),
            payment_type: default_payment_type(),
        }
    }
}

// =============================================================================
// Invoice Document
// =============================================================================

/// The complete editable billing document.
///
/// ## Ownership
/// One document per storage key. The CLI owns it inside a state container
/// and hands `&InvoiceDocument` to the engine after every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    #[serde(default)]
    pub customer: Customer,

    #[serde(default)]
    pub invoice: InvoiceMeta,

    #[serde(default)]
    pub items: Vec<LineItem>,

    /// VAT percentage applied to the subtotal.
    #[serde(default = "missing_number", deserialize_with = "lenient_number")]
    pub vat_rate: f64,

    /// Flat shipping charge. NaN and 0 both count as no shipping.
    #[serde(default = "missing_number", deserialize_with = "lenient_number")]
    pub shipping: f64,

    #[serde(default, deserialize_with = "lenient_text")]
    pub terms: String,
}

impl Default for InvoiceDocument {
    /// The document a first run (or "clear storage") starts from.
    fn default() -> Self {
        InvoiceDocument {
            customer: Customer::default(),
            invoice: InvoiceMeta::default(),
            items: vec![LineItem::sample()],
            vat_rate: DEFAULT_VAT_RATE,
            shipping: 0.0,
            terms: DEFAULT_TERMS.to_string(),
        }
    }
}

impl InvoiceDocument {
    /// Recomputes every derived figure from the current document.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.items, self.vat_rate, self.shipping)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_document() {
        let doc = InvoiceDocument::default();
        assert_eq!(doc.items, vec![LineItem::sample()]);
        assert_eq!(doc.vat_rate, 10.0);
        assert_eq!(doc.shipping, 0.0);
        assert_eq!(doc.invoice.payment_type, "COD");
        assert!(doc.invoice.date.is_empty());
        assert!(doc.terms.starts_with("Items purchased can be exchanged"));
    }

    #[test]
    fn test_blank_item() {
        let item = LineItem::blank();
        assert_eq!(item.qty, 1.0);
        assert_eq!(item.uom, "PCS");
        assert_eq!(item.amount(), 0.0);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let value = serde_json::to_value(InvoiceDocument::default()).unwrap();
        assert_eq!(value["vatRate"], json!(10.0));
        assert_eq!(value["invoice"]["paymentType"], json!("COD"));
        assert_eq!(value["items"][0]["unitPrice"], json!(2790.0));
    }

    #[test]
    fn test_lenient_item_fields() {
        let item: LineItem = serde_json::from_value(json!({
            "barcode": 1078068,
            "description": "Polo",
            "qty": "2",
            "uom": "PCS",
            "unitPrice": "100",
            "discount": null
        }))
        .unwrap();

        assert_eq!(item.barcode, "1078068");
        assert_eq!(item.qty, 2.0);
        assert_eq!(item.unit_price, 100.0);
        assert_eq!(item.discount, 0.0);
        assert_eq!(item.amount(), 200.0);
    }

    #[test]
    fn test_missing_numbers_read_as_nan() {
        let item: LineItem = serde_json::from_value(json!({ "description": "x" })).unwrap();
        assert!(item.qty.is_nan());
        assert!(item.amount().is_nan());
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let mut doc = InvoiceDocument::default();
        doc.shipping = f64::NAN;
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["shipping"], json!(null));
    }
}
