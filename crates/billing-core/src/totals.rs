//! # Totals Engine
//!
//! Turns the line items plus VAT and shipping into every figure the invoice
//! displays.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  items[0] ──► calculate_line ──► line_amounts[0] ─┐                     │
//! │  items[1] ──► calculate_line ──► line_amounts[1] ─┼─► sum = sub_total   │
//! │  items[n] ──► calculate_line ──► line_amounts[n] ─┘        │            │
//! │                                                            ▼            │
//! │                          vat_amount = sub_total × vat_rate / 100        │
//! │                          shipping   = NaN or 0 → 0                      │
//! │                          total      = sub_total + vat_amount + shipping │
//! │                          due        = total                             │
//! │                          words      = amount_to_words(total)            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `sub_total == sum(line_amounts)` (summed in row order, starting at 0)
//! - `total == sub_total + vat_amount + shipping`
//! - `due == total` (no deposits or partial payments)
//!
//! ## Precision
//! Results are full-precision `f64`. Rounding to two decimals is a display
//! concern, see [`crate::format`]. NaN inputs propagate into the figures
//! instead of raising an error.

use serde::Serialize;
use ts_rs::TS;

use crate::types::LineItem;
use crate::words::amount_to_words;

// =============================================================================
// Line Calculator
// =============================================================================

/// Net amount of one row: `qty × unit_price`, less the percentage discount.
///
/// No clamping: negative quantities, prices or discounts flow through the
/// arithmetic as they are.
///
/// ## Example
/// ```rust
/// use billing_core::{calculate_line, LineItem};
///
/// let item = LineItem {
///     qty: 1.0,
///     unit_price: 2790.0,
///     discount: 35.0,
///     ..LineItem::blank()
/// };
/// // 2790 - 976.5
/// assert_eq!(calculate_line(&item), 1813.5);
/// ```
pub fn calculate_line(item: &LineItem) -> f64 {
    let line_total = item.qty * item.unit_price;
    let discount_amount = line_total * item.discount / 100.0;
    line_total - discount_amount
}

// =============================================================================
// Tax Parameters
// =============================================================================

/// VAT and shipping inputs to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxParameters {
    /// VAT percentage.
    pub vat_rate: f64,

    /// Flat shipping charge as entered; may be NaN.
    pub shipping: f64,
}

impl TaxParameters {
    pub fn new(vat_rate: f64, shipping: f64) -> Self {
        TaxParameters { vat_rate, shipping }
    }

    /// Shipping with NaN (and -0) read as zero.
    #[inline]
    pub fn normalized_shipping(&self) -> f64 {
        normalize_shipping(self.shipping)
    }
}

/// Treats a falsy shipping value (NaN, 0, -0) as 0.
#[inline]
fn normalize_shipping(shipping: f64) -> f64 {
    if shipping.is_nan() || shipping == 0.0 {
        0.0
    } else {
        shipping
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Every derived figure of an invoice.
///
/// Rebuilt from scratch on each call to [`compute_totals`]; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// One amount per line item, same order as the items.
    pub line_amounts: Vec<f64>,
    pub sub_total: f64,
    pub vat_amount: f64,
    /// Shipping after normalization.
    pub shipping: f64,
    pub total: f64,
    pub due: f64,
    /// `total` in words; empty when the total cannot be put into words.
    pub total_in_words: String,
}

/// Computes the invoice totals.
///
/// This is the single entry point the front end calls after every edit.
/// It is pure: the same inputs always give bit-identical output.
///
/// ## Example
/// ```rust
/// use billing_core::{compute_totals, LineItem};
///
/// let totals = compute_totals(&[], 15.0, 60.0);
/// assert_eq!(totals.sub_total, 0.0);
/// assert_eq!(totals.total, 60.0);
/// assert_eq!(totals.due, 60.0);
/// ```
pub fn compute_totals(items: &[LineItem], vat_rate: f64, shipping: f64) -> InvoiceTotals {
    compute_with(items, TaxParameters::new(vat_rate, shipping))
}

/// [`compute_totals`] taking the tax inputs as one value.
pub fn compute_with(items: &[LineItem], tax: TaxParameters) -> InvoiceTotals {
    let line_amounts: Vec<f64> = items.iter().map(calculate_line).collect();
    let sub_total = line_amounts.iter().fold(0.0, |sum, amount| sum + amount);
    let vat_amount = sub_total * tax.vat_rate / 100.0;
    let shipping = tax.normalized_shipping();
    let total = sub_total + vat_amount + shipping;

    InvoiceTotals {
        line_amounts,
        sub_total,
        vat_amount,
        shipping,
        total,
        due: total,
        total_in_words: amount_to_words(total),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::coerce_str;

    fn item(qty: f64, unit_price: f64, discount: f64) -> LineItem {
        LineItem {
            qty,
            unit_price,
            discount,
            ..LineItem::blank()
        }
    }

    #[test]
    fn test_calculate_line() {
        assert_eq!(calculate_line(&item(1.0, 2790.0, 35.0)), 1813.5);
        assert_eq!(calculate_line(&item(3.0, 100.0, 0.0)), 300.0);
        assert_eq!(calculate_line(&item(2.0, 50.0, 100.0)), 0.0);
    }

    #[test]
    fn test_calculate_line_does_not_clamp() {
        assert_eq!(calculate_line(&item(-2.0, 10.0, 0.0)), -20.0);
        assert_eq!(calculate_line(&item(1.0, 100.0, 150.0)), -50.0);
        assert_eq!(calculate_line(&item(1.0, 100.0, -10.0)), 110.0);
    }

    #[test]
    fn test_calculate_line_nan_propagates() {
        assert!(calculate_line(&item(f64::NAN, 10.0, 0.0)).is_nan());
        assert!(calculate_line(&item(1.0, 10.0, f64::NAN)).is_nan());
    }

    #[test]
    fn test_compute_totals_sample_invoice() {
        let totals = compute_totals(&[item(1.0, 2790.0, 35.0)], 10.0, 0.0);

        assert_eq!(totals.line_amounts, vec![1813.5]);
        assert_eq!(totals.sub_total, 1813.5);
        assert_eq!(totals.vat_amount, 181.35);
        assert_eq!(totals.shipping, 0.0);
        assert_eq!(totals.total, 1813.5 + 181.35);
        assert_eq!(totals.due, totals.total);
        assert_eq!(
            totals.total_in_words,
            "one thousand nine hundred ninety-four taka and eighty-five paisa"
        );
    }

    #[test]
    fn test_compute_totals_empty() {
        let totals = compute_totals(&[], 10.0, 25.0);
        assert!(totals.line_amounts.is_empty());
        assert_eq!(totals.sub_total, 0.0);
        assert_eq!(totals.vat_amount, 0.0);
        assert_eq!(totals.total, 25.0);
        assert_eq!(totals.due, 25.0);
        assert_eq!(totals.total_in_words, "twenty-five taka and zero paisa");
    }

    #[test]
    fn test_compute_totals_preserves_line_order() {
        let items = [item(1.0, 10.0, 0.0), item(2.0, 5.0, 50.0), item(4.0, 1.0, 0.0)];
        let totals = compute_totals(&items, 0.0, 0.0);

        assert_eq!(totals.line_amounts, vec![10.0, 5.0, 4.0]);
        assert_eq!(totals.sub_total, 19.0);
    }

    #[test]
    fn test_sub_total_matches_line_formula() {
        let items = [
            item(3.0, 19.99, 12.5),
            item(1.0, 0.1, 0.0),
            item(7.0, 2.2, 3.0),
        ];
        let totals = compute_totals(&items, 5.0, 0.0);

        let expected: f64 = items
            .iter()
            .map(|i| (i.qty * i.unit_price) - (i.qty * i.unit_price * i.discount / 100.0))
            .sum();
        assert!((totals.sub_total - expected).abs() < 1e-9);
        assert_eq!(
            totals.total,
            totals.sub_total + totals.vat_amount + totals.shipping
        );
    }

    #[test]
    fn test_shipping_normalization() {
        let items = [item(1.0, 100.0, 0.0)];

        let nan = compute_totals(&items, 0.0, f64::NAN);
        assert_eq!(nan.shipping, 0.0);
        assert_eq!(nan.total, 100.0);

        // Text typed into the shipping box coerces to NaN
        let text = compute_totals(&items, 0.0, coerce_str("abc"));
        assert_eq!(text.total, 100.0);

        let empty = compute_totals(&items, 0.0, coerce_str(""));
        assert_eq!(empty.total, 100.0);

        let flat = compute_totals(&items, 0.0, 40.0);
        assert_eq!(flat.total, 140.0);
    }

    #[test]
    fn test_nan_vat_propagates_and_words_go_empty() {
        let totals = compute_totals(&[item(1.0, 100.0, 0.0)], f64::NAN, 0.0);
        assert!(totals.vat_amount.is_nan());
        assert!(totals.total.is_nan());
        assert!(totals.due.is_nan());
        assert_eq!(totals.total_in_words, "");
    }

    #[test]
    fn test_compute_totals_is_idempotent() {
        let items = [item(3.0, 19.99, 12.5), item(f64::NAN, 1.0, 0.0)];
        let first = compute_totals(&items, 7.5, 12.0);
        let second = compute_totals(&items, 7.5, 12.0);

        let bits = |t: &InvoiceTotals| {
            let mut bits: Vec<u64> = t.line_amounts.iter().map(|a| a.to_bits()).collect();
            bits.extend(
                [t.sub_total, t.vat_amount, t.shipping, t.total, t.due]
                    .iter()
                    .map(|v| v.to_bits()),
            );
            bits
        };
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first.total_in_words, second.total_in_words);
    }

    #[test]
    fn test_tax_parameters() {
        let tax = TaxParameters::new(10.0, f64::NAN);
        assert_eq!(tax.normalized_shipping(), 0.0);

        let totals = compute_with(&[item(1.0, 50.0, 0.0)], tax);
        assert_eq!(totals.total, 55.0);
    }
}
