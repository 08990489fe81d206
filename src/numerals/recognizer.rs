//! Numeral pattern recognition and substitution
//!
//! Every stage owns one pattern. A stage finds all non-overlapping matches,
//! renders each one and rebuilds the text from the unmatched spans and the
//! renderings.

use lazy_static::lazy_static;
use regex::Regex;

use crate::numerals::cardinal::cardinal_digits;
use crate::numerals::formatter;
use crate::numerals::ordinal::{apostrophe_ordinal, ordinal_digits};
use crate::numerals::types::{Numeral, Replacement, Stage};

lazy_static! {
    /// Only the first digit after '%' is taken
    static ref PERCENT_RE: Regex = Regex::new(r"%[0-9]").unwrap();
    /// End of text counts as the terminating whitespace
    static ref PERIOD_ORDINAL_RE: Regex = Regex::new(r"[0-9]+\.+(?:\s|$)").unwrap();
    static ref APOSTROPHE_ORDINAL_RE: Regex = Regex::new(r"[0-9]+['’]+\S*").unwrap();
    static ref HALF_RE: Regex = Regex::new(r"[0-9]+,5").unwrap();
    static ref THOUSANDS_RE: Regex = Regex::new(r"[0-9][0-9.]+[0-9]").unwrap();
    static ref DECIMAL_RE: Regex = Regex::new(r"[0-9]+,[0-9]+").unwrap();
    static ref INTEGER_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Pattern a stage scans for
pub fn pattern_for(stage: Stage) -> &'static Regex {
    match stage {
        Stage::Percent => &PERCENT_RE,
        Stage::PeriodOrdinal => &PERIOD_ORDINAL_RE,
        Stage::ApostropheOrdinal => &APOSTROPHE_ORDINAL_RE,
        Stage::Half => &HALF_RE,
        Stage::ThousandsSeparator => &THOUSANDS_RE,
        Stage::Decimal => &DECIMAL_RE,
        Stage::Integer => &INTEGER_RE,
    }
}

/// Renders one match of a stage's pattern
pub fn render(stage: Stage, matched: &str) -> String {
    match stage {
        Stage::Percent => formatter::percent(matched.trim_start_matches('%')),
        Stage::PeriodOrdinal => ordinal_digits(leading_digits(matched)),
        Stage::ApostropheOrdinal => apostrophe_ordinal(matched),
        Stage::Half => formatter::half(leading_digits(matched)),
        Stage::ThousandsSeparator => matched.replace('.', ""),
        Stage::Decimal => match Numeral::parse(matched) {
            Some(numeral) => numeral.to_words(),
            None => matched.to_string(),
        },
        Stage::Integer => cardinal_digits(matched),
    }
}

/// Runs a single stage over the whole text
pub fn apply_stage(stage: Stage, text: &str) -> (String, Vec<Replacement>) {
    replace_all(pattern_for(stage), stage, text, |matched| render(stage, matched))
}

/// Replaces every match of `pattern` with `handler(match)`
///
/// Only substitutions that change the text are recorded. Offsets are byte
/// offsets into `text`.
pub fn replace_all<F>(
    pattern: &Regex,
    stage: Stage,
    text: &str,
    mut handler: F,
) -> (String, Vec<Replacement>)
where
    F: FnMut(&str) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut replacements = Vec::new();
    let mut last_end = 0;

    for m in pattern.find_iter(text) {
        // unmatched text before this match
        result.push_str(&text[last_end..m.start()]);

        let original = m.as_str();
        let replaced = handler(original);

        if replaced != original {
            tracing::trace!(
                "[{}] '{}' -> '{}' at {}..{}",
                stage.name(),
                original,
                replaced,
                m.start(),
                m.end()
            );
            replacements.push(Replacement {
                original: original.to_string(),
                replaced: replaced.clone(),
                start: m.start(),
                end: m.end(),
                stage,
            });
        }

        result.push_str(&replaced);
        last_end = m.end();
    }

    result.push_str(&text[last_end..]);

    (result, replacements)
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}
