//! Ordinal formatter
//!
//! Ordinals are made by swapping the ending of the cardinal's last word, so
//! only the trailing characters of the cardinal string matter.

use crate::numerals::cardinal::cardinal_digits;
use crate::numerals::rules::ordinal_suffix_for;
use crate::numerals::types::Numeral;

/// Apostrophes accepted between a number and its case suffix
pub const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Ordinal form of an integer
pub fn ordinal(n: u128) -> String {
    ordinal_digits(&n.to_string())
}

/// Ordinal form of an ASCII digit string
///
/// On success the ordinal ends with a single space. When no suffix entry
/// fits, the cardinal is returned with a literal period appended. A number
/// beyond the magnitude table gives "".
pub fn ordinal_digits(digits: &str) -> String {
    let cardinal = cardinal_digits(digits);
    if cardinal.is_empty() {
        return String::new();
    }

    match ordinal_suffix_for(&cardinal) {
        Some((suffix, replacement)) => {
            let stem = &cardinal[..cardinal.len() - suffix.len()];
            format!("{}{} ", stem, replacement)
        }
        None => {
            tracing::debug!("No ordinal suffix for '{}', falling back", cardinal);
            format!("{}.", cardinal)
        }
    }
}

/// Spells out a number written with an apostrophe case suffix
///
/// `3'üncü` → `üçüncü`, `1990'larda` → `bin dokuz yüz doksanlarda`. The
/// suffix text is passed through untouched.
pub fn apostrophe_ordinal(token: &str) -> String {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits_end == 0 {
        return token.to_string();
    }

    let (digits, rest) = token.split_at(digits_end);
    let suffix = rest.trim_start_matches(&APOSTROPHES[..]);

    let words = Numeral::Integer(digits.to_string()).to_words();
    format!("{}{}", words, suffix)
}
