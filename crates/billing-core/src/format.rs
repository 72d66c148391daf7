//! # Display Formatting
//!
//! Renders engine numbers the way the invoice screen and CSV show them.
//!
//! The engine itself returns full-precision numbers. Rounding to two
//! decimals happens only here, at the presentation edge.
//!
//! ## Tie Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rust `{:.2}` rounds an exact half-cent tie to even:   0.125 → "0.12"   │
//! │  The invoice screen rounds it away from zero:          0.125 → "0.13"   │
//! │                                                                         │
//! │  Exact ties only exist for multiples of 1/8 (0.125, 0.375, ...).       │
//! │  Everything else (1.005 is really 1.00499999...) already agrees.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Magnitude from which the screen switches to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Formats an amount with exactly two decimals.
///
/// ## Example
/// ```rust
/// use billing_core::format_amount;
///
/// assert_eq!(format_amount(1813.5), "1813.50");
/// assert_eq!(format_amount(0.125), "0.13");
/// assert_eq!(format_amount(f64::NAN), "NaN");
/// ```
pub fn format_amount(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    if value == 0.0 {
        return "0.00".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_THRESHOLD {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // Exact half-cent: x * 8 is an odd integer
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{}{}", sign, round_tie_up(&format!("{:.3}", magnitude)));
    }

    format!("{}{:.2}", sign, magnitude)
}

/// Formats a number in its shortest round-trip form.
///
/// ## Example
/// ```rust
/// use billing_core::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_THRESHOLD || magnitude < 1e-6 {
        let exponent_form = format!("{:e}", value);
        // Rust writes `1e21` / `1e-7`; the screen writes `1e+21` / `1e-7`
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        };
    }

    value.to_string()
}

/// Rounds `"<digits>.dd5"` up to two decimals on the digits themselves.
///
/// The three-decimal text of an exact tie is exact, while scaling by 100
/// stops being exact above 2^53.
fn round_tie_up(three_decimals: &str) -> String {
    let mut digits: Vec<u8> = three_decimals.as_bytes().to_vec();
    digits.pop();

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match *digit {
            b'.' => {}
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
            }
        }
    }

    let rounded = String::from_utf8_lossy(&digits).into_owned();
    if carry {
        format!("1{}", rounded)
    } else {
        rounded
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
