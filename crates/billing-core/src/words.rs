//! # Amount in Words
//!
//! Renders the invoice total as English words for the "amount in words"
//! line, e.g. `1813.5` → `"one thousand eight hundred thirteen taka and
//! fifty paisa"`.
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  number_to_words(n)                                                     │
//! │                                                                         │
//! │  n < 20          → ONES[n]                          "seventeen"         │
//! │  n < 100         → TENS[n/10] [-ONES[n%10]]          "twenty-three"      │
//! │  n < 1 000       → ONES[n/100] hundred [rest]        "one hundred five"  │
//! │  n < 1 000 000   → words(n/1000) thousand [rest]     "one thousand"      │
//! │  otherwise       → words(n/1e6) million [rest]       "two million"       │
//! │                                                                         │
//! │  [rest] = " " + words(remainder), only when remainder != 0              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scale Boundary
//! There is no "billion". From 1 000 000 000 upwards the million branch
//! recurses into itself, so `2_000_000_000` reads `"two thousand million"`.
//! The output is always defined, just not idiomatic past 999 999 999.

/// Words for 0 to 19.
const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the tens multiples, indexed by the tens digit.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Currency unit for the whole part.
const WHOLE_UNIT: &str = "taka";

/// Currency unit for the hundredths.
const FRACTION_UNIT: &str = "paisa";

/// Converts a non-negative integer to lowercase English words.
///
/// ## Example
/// ```rust
/// use billing_core::number_to_words;
///
/// assert_eq!(number_to_words(0), "zero");
/// assert_eq!(number_to_words(21), "twenty-one");
/// assert_eq!(number_to_words(105), "one hundred five");
/// assert_eq!(number_to_words(1813), "one thousand eight hundred thirteen");
/// ```
pub fn number_to_words(num: u64) -> String {
    match num {
        0..=19 => ONES[num as usize].to_string(),
        20..=99 => {
            let tens = TENS[(num / 10) as usize];
            match num % 10 {
                0 => tens.to_string(),
                ones => format!("{}-{}", tens, ONES[ones as usize]),
            }
        }
        100..=999 => scaled(ONES[(num / 100) as usize].to_string(), "hundred", num % 100),
        1_000..=999_999 => scaled(number_to_words(num / 1_000), "thousand", num % 1_000),
        _ => scaled(
            number_to_words(num / 1_000_000),
            "million",
            num % 1_000_000,
        ),
    }
}

fn scaled(head: String, scale: &str, remainder: u64) -> String {
    if remainder == 0 {
        format!("{} {}", head, scale)
    } else {
        format!("{} {} {}", head, scale, number_to_words(remainder))
    }
}

/// Splits an amount into whole taka and rounded paisa.
///
/// Returns `None` when the amount cannot be put into words: NaN, infinite,
/// negative, or too large for a `u64` whole part.
///
/// ## Paisa Carry
/// Paisa are rounded, not truncated, so `2.999` rounds to 100 paisa.
/// That is carried into the whole part: `2.999` → `(3, 0)`, never
/// `(2, 100)`.
pub fn split_amount(amount: f64) -> Option<(u64, u64)> {
    if !amount.is_finite() || amount < 0.0 || amount >= u64::MAX as f64 {
        return None;
    }

    let whole = amount.floor();
    let fraction = ((amount - whole) * 100.0).round() as u64;
    let whole = whole as u64;

    if fraction >= 100 {
        Some((whole + 1, 0))
    } else {
        Some((whole, fraction))
    }
}

/// Renders an amount as `"<whole> taka and <fraction> paisa"`.
///
/// ## Fail Soft
/// NaN yields an empty string instead of an error, and so does any amount
/// [`split_amount`] rejects. The caller shows an empty words line.
///
/// ## Example
/// ```rust
/// use billing_core::amount_to_words;
///
/// assert_eq!(
///     amount_to_words(1813.5),
///     "one thousand eight hundred thirteen taka and fifty paisa"
/// );
/// assert_eq!(amount_to_words(f64::NAN), "");
/// ```
pub fn amount_to_words(amount: f64) -> String {
    if amount.is_nan() {
        return String::new();
    }

    match split_amount(amount) {
        Some((whole, fraction)) => format!(
            "{} {} and {} {}",
            number_to_words(whole),
            WHOLE_UNIT,
            number_to_words(fraction),
            FRACTION_UNIT
        ),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_words_small() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(7), "seven");
        assert_eq!(number_to_words(13), "thirteen");
        assert_eq!(number_to_words(19), "nineteen");
    }

    #[test]
    fn test_number_to_words_tens() {
        assert_eq!(number_to_words(20), "twenty");
        assert_eq!(number_to_words(21), "twenty-one");
        assert_eq!(number_to_words(50), "fifty");
        assert_eq!(number_to_words(99), "ninety-nine");
    }

    #[test]
    fn test_number_to_words_hundreds() {
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(105), "one hundred five");
        assert_eq!(number_to_words(342), "three hundred forty-two");
        assert_eq!(number_to_words(999), "nine hundred ninety-nine");
    }

    #[test]
    fn test_number_to_words_thousands() {
        assert_eq!(number_to_words(1000), "one thousand");
        assert_eq!(number_to_words(1001), "one thousand one");
        assert_eq!(number_to_words(1994), "one thousand nine hundred ninety-four");
        assert_eq!(
            number_to_words(999_999),
            "nine hundred ninety-nine thousand nine hundred ninety-nine"
        );
    }

    #[test]
    fn test_number_to_words_millions() {
        assert_eq!(number_to_words(1_000_000), "one million");
        assert_eq!(
            number_to_words(12_000_345),
            "twelve million three hundred forty-five"
        );
        assert_eq!(
            number_to_words(999_999_999),
            "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine"
        );
    }

    /// No billion scale: the million branch nests.
    #[test]
    fn test_number_to_words_past_millions_nests() {
        assert_eq!(number_to_words(1_000_000_000), "one thousand million");
        assert_eq!(
            number_to_words(2_000_000_001),
            "two thousand million one"
        );
    }

    #[test]
    fn test_amount_to_words() {
        assert_eq!(
            amount_to_words(1813.5),
            "one thousand eight hundred thirteen taka and fifty paisa"
        );
        assert_eq!(amount_to_words(0.0), "zero taka and zero paisa");
        assert_eq!(amount_to_words(0.07), "zero taka and seven paisa");
        assert_eq!(amount_to_words(100.0), "one hundred taka and zero paisa");
    }

    /// 2.999 rounds to 100 paisa, which carries into the taka.
    #[test]
    fn test_amount_to_words_fraction_carry() {
        assert_eq!(split_amount(2.999), Some((3, 0)));
        assert_eq!(amount_to_words(2.999), "three taka and zero paisa");
        assert_eq!(amount_to_words(1.995), "two taka and zero paisa");
    }

    #[test]
    fn test_amount_to_words_fail_soft() {
        assert_eq!(amount_to_words(f64::NAN), "");
        assert_eq!(amount_to_words(f64::INFINITY), "");
        assert_eq!(amount_to_words(-5.0), "");
        assert_eq!(amount_to_words(1e20), "");
    }
}
