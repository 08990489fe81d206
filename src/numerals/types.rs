//! Numeral normalization types

use serde::{Deserialize, Serialize};

use crate::numerals::formatter;

/// A numeric value as written in the text
///
/// Digits are kept as strings so runs of any length can be spelled out
/// without a fixed-width parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Numeral {
    /// Whole number, ASCII digits
    Integer(String),
    /// Number with a fractional part
    Decimal {
        /// Digits before the separator
        integer: String,
        /// Digits after the separator
        fraction: String,
    },
}

impl Numeral {
    /// Parses a digit run with at most one '.' or ',' separator
    ///
    /// Both separators mean the same thing. Returns None for empty parts,
    /// non-digit characters or more than one separator.
    pub fn parse(raw: &str) -> Option<Self> {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        match raw.split_once(|c: char| c == '.' || c == ',') {
            None => is_digits(raw).then(|| Numeral::Integer(raw.to_string())),
            Some((integer, fraction)) => {
                if is_digits(integer) && is_digits(fraction) {
                    Some(Numeral::Decimal {
                        integer: integer.to_string(),
                        fraction: fraction.to_string(),
                    })
                } else {
                    None
                }
            }
        }
    }

    /// Spells the value out in Turkish
    ///
    /// Empty when the integer part is beyond the magnitude table.
    pub fn to_words(&self) -> String {
        formatter::numeral_words(self)
    }
}

/// One pass of the rewrite pipeline
///
/// Stages always run in the order of [`Stage::ALL`]; each one sees the output
/// of the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// `%5` → `yüzde 5`
    Percent,
    /// `5. ` → `beşinci `
    PeriodOrdinal,
    /// `3'üncü` → `üç` + `üncü`
    ApostropheOrdinal,
    /// `3,5` → `üç buçuk`
    Half,
    /// `1.000.000` → `1000000`
    ThousandsSeparator,
    /// `2,75` → `iki virgül yedi beş`
    Decimal,
    /// `42` → `kırk iki`
    Integer,
}

impl Stage {
    /// Pipeline order
    pub const ALL: [Stage; 7] = [
        Stage::Percent,
        Stage::PeriodOrdinal,
        Stage::ApostropheOrdinal,
        Stage::Half,
        Stage::ThousandsSeparator,
        Stage::Decimal,
        Stage::Integer,
    ];

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Percent => "percent",
            Stage::PeriodOrdinal => "period_ordinal",
            Stage::ApostropheOrdinal => "apostrophe_ordinal",
            Stage::Half => "half",
            Stage::ThousandsSeparator => "thousands_separator",
            Stage::Decimal => "decimal",
            Stage::Integer => "integer",
        }
    }
}

/// Substitution record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// Matched text
    pub original: String,
    /// Text written in its place
    pub replaced: String,
    /// Start byte offset in the stage's input
    pub start: usize,
    /// End byte offset in the stage's input (exclusive)
    pub end: usize,
    /// Stage that made the substitution
    pub stage: Stage,
}

/// Normalization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Normalized text
    pub text: String,
    /// Whether anything changed
    pub changed: bool,
    /// Substitutions in the order they were made
    pub applied: Vec<Replacement>,
    /// Processing time in microseconds
    pub elapsed_us: u64,
}

impl NormalizationResult {
    /// Result for input that needed no change
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(Numeral::parse("42"), Some(Numeral::Integer("42".into())));
        assert_eq!(Numeral::parse("007"), Some(Numeral::Integer("007".into())));
        assert_eq!(Numeral::parse(""), None);
        assert_eq!(Numeral::parse("4a"), None);
    }

    #[test]
    fn test_parse_decimal_either_separator() {
        let expected = Some(Numeral::Decimal {
            integer: "2".into(),
            fraction: "75".into(),
        });
        assert_eq!(Numeral::parse("2,75"), expected);
        assert_eq!(Numeral::parse("2.75"), expected);
    }

    #[test]
    fn test_parse_rejects_malformed_decimal() {
        assert_eq!(Numeral::parse("2,"), None);
        assert_eq!(Numeral::parse(",5"), None);
        assert_eq!(Numeral::parse("1.2.3"), None);
        assert_eq!(Numeral::parse("1,2.3"), None);
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ALL.first(), Some(&Stage::Percent));
        assert_eq!(Stage::ALL.last(), Some(&Stage::Integer));
        let json = serde_json::to_string(&Stage::ThousandsSeparator).unwrap();
        assert_eq!(json, "\"thousands_separator\"");
    }
}
