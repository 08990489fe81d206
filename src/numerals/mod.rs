//! Turkish numeral normalization layer
//!
//! Rewrites the numerals in a text as Turkish words so the result contains no
//! digits, e.g. before speech synthesis.
//!
//! ## Pipeline
//! 1. Percent (`%5` → `yüzde 5`, first digit only)
//! 2. Ordinal with a period (`5. ` → `beşinci `)
//! 3. Ordinal with an apostrophe suffix (`3'üncü` → `üçüncü`)
//! 4. "And a half" (`3,5` → `üç buçuk`)
//! 5. Thousands separators removed (`1.000` → `1000`)
//! 6. Decimals (`2,75` → `iki virgül yedi beş`)
//! 7. Remaining digit runs (`42` → `kırk iki`)
//!
//! Each stage rewrites the output of the previous one, so the order is fixed.

mod cardinal;
mod engine;
mod formatter;
mod ordinal;
mod recognizer;
mod rules;
mod types;

pub use cardinal::{cardinal, cardinal_digits};
pub use engine::NumeralEngine;
pub use formatter::{decimal, fraction_words, half, numeral_words, percent};
pub use ordinal::{apostrophe_ordinal, ordinal, ordinal_digits};
pub use recognizer::{apply_stage, replace_all};
pub use rules::MAX_DIGITS;
pub use types::{NormalizationResult, Numeral, Replacement, Stage};
