//! # Validation Module
//!
//! Checks for values a user types at the command line.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI arguments                                                │
//! │  ├── THIS MODULE: reject NaN, negatives, discount > 100                │
//! │  └── Immediate feedback, nothing is saved                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Document + totals engine                                     │
//! │  └── No checks at all; NaN and negatives flow through the arithmetic   │
//! │                                                                         │
//! │  Imported JSON skips layer 1 and is taken as it is.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::validation::{validate_discount, validate_quantity};
//!
//! assert!(validate_quantity(2.0).is_ok());
//! assert!(validate_discount(120.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest discount percentage a user may type.
pub const MAX_DISCOUNT: f64 = 100.0;

// =============================================================================
// Numeric Validators
// =============================================================================

fn non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a quantity: finite and ≥ 0. Zero is allowed.
pub fn validate_quantity(qty: f64) -> ValidationResult<f64> {
    non_negative("qty", qty)
}

/// Validates a unit price: finite and ≥ 0. Zero is allowed (free items).
pub fn validate_unit_price(price: f64) -> ValidationResult<f64> {
    non_negative("unitPrice", price)
}

/// Validates a discount percentage: finite and within 0..=100.
pub fn validate_discount(discount: f64) -> ValidationResult<f64> {
    non_negative("discount", discount)?;

    if discount > MAX_DISCOUNT {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT,
        });
    }

    Ok(discount)
}

/// Validates a VAT percentage: finite and ≥ 0.
pub fn validate_vat_rate(rate: f64) -> ValidationResult<f64> {
    non_negative("vatRate", rate)
}

/// Validates a shipping charge: finite and ≥ 0.
pub fn validate_shipping(shipping: f64) -> ValidationResult<f64> {
    non_negative("shipping", shipping)
}

// =============================================================================
// Row Validators
// =============================================================================

/// Validates a 1-based row number against the number of rows and returns
/// the 0-based index.
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_row;
///
/// assert_eq!(validate_row(1, 3).unwrap(), 0);
/// assert!(validate_row(0, 3).is_err());
/// assert!(validate_row(4, 3).is_err());
/// ```
pub fn validate_row(row: usize, len: usize) -> ValidationResult<usize> {
    if row == 0 || row > len {
        return Err(ValidationError::OutOfRange {
            field: "row".to_string(),
            min: 1.0,
            max: len as f64,
        });
    }

    Ok(row - 1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(2.5).is_ok());

        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(2790.0).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(35.0).is_ok());
        assert!(validate_discount(100.0).is_ok());

        assert!(matches!(
            validate_discount(100.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_discount(-5.0),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_vat_and_shipping() {
        assert!(validate_vat_rate(10.0).is_ok());
        assert!(validate_vat_rate(-10.0).is_err());
        assert!(validate_shipping(0.0).is_ok());
        assert!(matches!(
            validate_shipping(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_row() {
        assert_eq!(validate_row(1, 1).unwrap(), 0);
        assert_eq!(validate_row(3, 3).unwrap(), 2);
        assert!(validate_row(0, 1).is_err());
        assert!(validate_row(2, 1).is_err());
    }
}
