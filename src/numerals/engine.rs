//! Numeral normalization engine
//!
//! Runs the enabled stages over the text in fixed pipeline order.

use std::time::Instant;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizerConfig;
use crate::numerals::recognizer::apply_stage;
use crate::numerals::types::{NormalizationResult, Stage};

/// Numeral engine (reusable; patterns are compiled once per process)
#[derive(Debug, Clone)]
pub struct NumeralEngine {
    /// Enabled stages, already in pipeline order
    stages: Vec<Stage>,
    unicode_nfc: bool,
    record_replacements: bool,
}

impl NumeralEngine {
    /// Creates an engine from a config
    ///
    /// Stage order in the config is ignored; stages always run in
    /// [`Stage::ALL`] order.
    pub fn new(config: &NormalizerConfig) -> Self {
        let stages = Stage::ALL
            .iter()
            .copied()
            .filter(|stage| config.is_enabled(*stage))
            .collect();

        Self {
            stages,
            unicode_nfc: config.unicode_nfc,
            record_replacements: config.record_replacements,
        }
    }

    /// Stages this engine runs, in order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Normalizes text
    ///
    /// Pure function that cannot fail. Numerals that cannot be spelled out
    /// degrade to partial or empty substitutions.
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let start = Instant::now();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), 0);
        }

        let mut current = if self.unicode_nfc {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };
        let mut applied = Vec::new();

        for &stage in &self.stages {
            let (next, replacements) = apply_stage(stage, &current);

            if !replacements.is_empty() {
                tracing::debug!(
                    "[{}] {} substitution(s)",
                    stage.name(),
                    replacements.len()
                );
            }
            if self.record_replacements {
                applied.extend(replacements);
            }

            current = next;
        }

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = current != text;

        NormalizationResult {
            text: current,
            changed,
            applied,
            elapsed_us,
        }
    }
}

impl Default for NumeralEngine {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        NumeralEngine::default().normalize(text).text
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(normalize("5."), "beşinci ");
        assert_eq!(normalize("3,5"), "üç buçuk");
        assert_eq!(normalize("1.000"), "bin");
        assert_eq!(normalize("2,75"), "iki virgül yedi beş");
    }

    #[test]
    fn test_percent_remaining_digits_spelled_later() {
        // the percent stage keeps "10" as digits; the integer stage reads them
        assert_eq!(normalize("%5"), "yüzde beş");
        assert_eq!(normalize("%10"), "yüzde on");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            normalize("Toplantı 3. katta, saat 14'te ve 1.250 kişi katıldı."),
            "Toplantı üçüncü katta, saat ondörtte ve bin iki yüz elli kişi katıldı."
        );
    }

    #[test]
    fn test_decimal_and_half_together() {
        assert_eq!(
            normalize("Fiyat 2,5 lira, faiz 0,25 oldu"),
            "Fiyat iki buçuk lira, faiz sıfır virgül iki beş oldu"
        );
    }

    #[test]
    fn test_thousands_before_decimal() {
        assert_eq!(normalize("1.500,75"), "bin beş yüz virgül yedi beş");
        assert_eq!(normalize("2.000.000"), "iki milyon");
    }

    #[test]
    fn test_half_quirk_flows_into_integer_stage() {
        assert_eq!(normalize("3,55"), "üç buçukbeş");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let once = normalize("Saat 10:30'da %5 indirim, 21. yüzyıl");
        assert!(!once.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_no_change_for_plain_text() {
        let result = NumeralEngine::default().normalize("merhaba dünya");
        assert!(!result.changed);
        assert_eq!(result.text, "merhaba dünya");
        assert!(result.applied.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = NumeralEngine::default().normalize("");
        assert!(!result.changed);
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_overflow_removes_numeral() {
        let text = format!("çok büyük {} sayı", "1".repeat(25));
        assert_eq!(normalize(&text), "çok büyük  sayı");
    }

    #[test]
    fn test_records_replacements_in_stage_order() {
        let result = NumeralEngine::default().normalize("5. ve 1.000");
        assert!(result.changed);

        let stages: Vec<Stage> = result.applied.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::PeriodOrdinal, Stage::ThousandsSeparator, Stage::Integer]
        );
        assert_eq!(result.text, "beşinci ve bin");
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let config = NormalizerConfig {
            enabled_stages: vec![Stage::Integer, Stage::Percent],
            ..NormalizerConfig::default()
        };
        let engine = NumeralEngine::new(&config);
        assert_eq!(engine.stages(), &[Stage::Percent, Stage::Integer]);

        // without the ordinal stage "5." stays a cardinal followed by a period
        assert_eq!(engine.normalize("5. %3").text, "beş. yüzde üç");
    }

    #[test]
    fn test_record_replacements_off() {
        let config = NormalizerConfig {
            record_replacements: false,
            ..NormalizerConfig::default()
        };
        let result = NumeralEngine::new(&config).normalize("42");
        assert_eq!(result.text, "kırk iki");
        assert!(result.changed);
        assert!(result.applied.is_empty());
    }

    #[test]
    fn test_unicode_nfc_pre_pass() {
        let config = NormalizerConfig {
            unicode_nfc: true,
            ..NormalizerConfig::default()
        };
        // "u" + combining diaeresis
        let result = NumeralEngine::new(&config).normalize("3 gu\u{0308}n");
        assert_eq!(result.text, "üç gün");
        assert!(result.changed);
    }
}
