//! Decimal, percent and "buçuk" rendering
//!
//! Builds on the cardinal converter. Overflowing integer parts give an empty
//! rendering, which the rewriter writes as-is.

use crate::numerals::cardinal::cardinal_digits;
use crate::numerals::rules::{COMMA_WORD, DECIMAL_DIGITS, HALF_WORD, PERCENT_WORD};
use crate::numerals::types::Numeral;

/// General numeral-to-words entry point
pub fn numeral_words(numeral: &Numeral) -> String {
    match numeral {
        Numeral::Integer(digits) => cardinal_digits(digits),
        Numeral::Decimal { integer, fraction } => decimal(integer, fraction),
    }
}

/// `<integer words> virgül <digit words>`
pub fn decimal(integer: &str, fraction: &str) -> String {
    let integer_words = cardinal_digits(integer);
    if integer_words.is_empty() {
        return String::new();
    }

    format!("{} {} {}", integer_words, COMMA_WORD, fraction_words(fraction))
}

/// Reads fractional digits one by one
///
/// Trailing zeros are dropped, but at least one digit is always read
/// ("50" → "beş", "0" → "sıfır").
pub fn fraction_words(fraction: &str) -> String {
    let digits: Vec<usize> = fraction
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| (b - b'0') as usize)
        .collect();

    let significant = digits
        .iter()
        .rposition(|&d| d != 0)
        .map_or(1, |last| last + 1)
        .min(digits.len());

    digits[..significant]
        .iter()
        .map(|&d| DECIMAL_DIGITS[d])
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<integer words> buçuk`
pub fn half(integer: &str) -> String {
    let integer_words = cardinal_digits(integer);
    if integer_words.is_empty() {
        return String::new();
    }

    format!("{} {}", integer_words, HALF_WORD)
}

/// `yüzde <digit>`
///
/// The digit stays a digit here; the integer stage spells it out later.
pub fn percent(digit: &str) -> String {
    format!("{} {}", PERCENT_WORD, digit)
}
