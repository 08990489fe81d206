//! Lookup tables for Turkish numerals
//!
//! Digit words, magnitude names and the ordinal suffix table. Everything here
//! is constant; the converters only index into these tables.

/// Word for zero, used when the whole number is zero
pub const ZERO: &str = "sıfır";

/// Hundreds word ("bir yüz" is never said, so it usually stands alone)
pub const HUNDRED: &str = "yüz";

/// Separator word between the integer and fractional parts
pub const COMMA_WORD: &str = "virgül";

/// "And a half", used for `<n>,5`
pub const HALF_WORD: &str = "buçuk";

/// Percent prefix ("yüzde 5")
pub const PERCENT_WORD: &str = "yüzde";

/// Units 0-9 (index 0 is never emitted)
pub const UNITS: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

/// 11-19, indexed by the units digit
pub const TEENS: [&str; 10] = [
    "", "onbir", "oniki", "onüç", "ondört", "onbeş", "onaltı", "onyedi", "onsekiz", "ondokuz",
];

/// Multiples of ten, indexed by the tens digit
pub const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

/// Digit words for the fractional part, read one digit at a time
pub const DECIMAL_DIGITS: [&str; 10] = [
    "sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

/// Powers of one thousand; index `i` names 1000^i
pub const MAGNITUDES: [&str; 7] = [
    "", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon",
];

/// Longest significant digit run the cardinal converter accepts
pub const MAX_DIGITS: usize = MAGNITUDES.len() * 3;

/// (cardinal ending, ordinal replacement), checked in order, first hit wins
///
/// Scale words ending in "on" (milyon, trilyon, ...) are caught by the "on"
/// entry. "milyar" has no entry and takes the degraded fallback.
pub const ORDINAL_SUFFIXES: [(&str, &str); 22] = [
    ("sıfır", "sıfırıncı"),
    ("bir", "birinci"),
    ("iki", "ikinci"),
    ("üç", "üçüncü"),
    ("dört", "dördüncü"),
    ("beş", "beşinci"),
    ("altı", "altıncı"),
    ("yedi", "yedinci"),
    ("sekiz", "sekizinci"),
    ("dokuz", "dokuzuncu"),
    ("on", "onuncu"),
    ("yirmi", "yirminci"),
    ("otuz", "otuzuncu"),
    ("kırk", "kırkıncı"),
    ("elli", "ellinci"),
    ("altmış", "altmışıncı"),
    ("yetmiş", "yetmişinci"),
    ("seksen", "sekseninci"),
    ("doksan", "doksanıncı"),
    ("yüz", "yüzüncü"),
    ("bin", "bininci"),
    ("milyon", "milyonuncu"),
];

/// Finds the ordinal replacement for the ending of a cardinal string
pub fn ordinal_suffix_for(cardinal: &str) -> Option<(&'static str, &'static str)> {
    ORDINAL_SUFFIXES
        .iter()
        .copied()
        .find(|(suffix, _)| cardinal.ends_with(suffix))
}
