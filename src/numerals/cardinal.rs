//! Cardinal converter
//!
//! Maps a non-negative integer to its Turkish word form, three digits at a time
//! from the most significant group down.

use crate::numerals::rules::{HUNDRED, MAGNITUDES, TEENS, TENS, UNITS, ZERO};

/// Converts an integer to Turkish words
///
/// Returns an empty string when the number needs a larger scale than the
/// magnitude table has.
pub fn cardinal(n: u128) -> String {
    cardinal_digits(&n.to_string())
}

/// Converts an ASCII digit string to Turkish words
///
/// Leading zeros are ignored. An empty or non-digit input, or a number with
/// more significant digits than the magnitude table covers, yields "".
pub fn cardinal_digits(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return ZERO.to_string();
    }

    let groups = (significant.len() + 2) / 3;
    if groups > MAGNITUDES.len() {
        tracing::debug!(
            "Numeral with {} digits exceeds the magnitude table",
            significant.len()
        );
        return String::new();
    }

    // pad to whole groups of three
    let padded = format!("{:0>width$}", significant, width = groups * 3);

    let mut words: Vec<&'static str> = Vec::with_capacity(groups * 4);
    for (i, chunk) in padded.as_bytes().chunks(3).enumerate() {
        let h = (chunk[0] - b'0') as usize;
        let t = (chunk[1] - b'0') as usize;
        let u = (chunk[2] - b'0') as usize;
        let scale = groups - i - 1;

        push_group(&mut words, h, t, u, scale);

        if scale >= 1 && h + t + u > 0 {
            words.push(MAGNITUDES[scale]);
        }
    }

    words.join(" ")
}

/// Emits the words for one three-digit group
fn push_group(words: &mut Vec<&'static str>, h: usize, t: usize, u: usize, scale: usize) {
    if h >= 1 {
        // no "bir yüz"
        if h != 1 {
            words.push(UNITS[h]);
        }
        words.push(HUNDRED);
    }

    match t {
        0 => {
            // no "bir bin": a thousands group that is exactly 1 is just "bin"
            let lone_thousand = scale == 1 && h == 0 && u == 1;
            if u >= 1 && !lone_thousand {
                words.push(UNITS[u]);
            }
        }
        1 => {
            if u >= 1 {
                words.push(TEENS[u]);
            } else {
                words.push(TENS[1]);
            }
        }
        _ => {
            words.push(TENS[t]);
            if u >= 1 {
                words.push(UNITS[u]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(cardinal(0), "sıfır");
        assert_eq!(cardinal_digits("000"), "sıfır");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(cardinal(1), "bir");
        assert_eq!(cardinal(10), "on");
        assert_eq!(cardinal(11), "onbir");
        assert_eq!(cardinal(19), "ondokuz");
        assert_eq!(cardinal(20), "yirmi");
        assert_eq!(cardinal(21), "yirmi bir");
        assert_eq!(cardinal(99), "doksan dokuz");
    }

    #[test]
    fn test_hundreds_and_thousands() {
        assert_eq!(cardinal(100), "yüz");
        assert_eq!(cardinal(101), "yüz bir");
        assert_eq!(cardinal(200), "iki yüz");
        assert_eq!(cardinal(1000), "bin");
        assert_eq!(cardinal(1001), "bin bir");
        assert_eq!(cardinal(1500), "bin beş yüz");
        assert_eq!(cardinal(2000), "iki bin");
        assert_eq!(cardinal(11_000), "onbir bin");
        assert_eq!(cardinal(101_000), "yüz bir bin");
        assert_eq!(cardinal(1984), "bin dokuz yüz seksen dört");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(cardinal(1_000_000), "bir milyon");
        assert_eq!(cardinal(2_000_001), "iki milyon bir");
        assert_eq!(cardinal(1_000_000_000), "bir milyar");
        assert_eq!(cardinal(1_001_000), "bir milyon bin");
        assert_eq!(
            cardinal(100_000_000_000_000_000_000),
            "yüz kentilyon"
        );
    }

    #[test]
    fn test_elision_invariant() {
        for n in 0..1000u128 {
            let words = cardinal(n);
            assert!(!words.contains("bir yüz"), "{} -> {}", n, words);
            assert!(!words.contains("bir bin"), "{} -> {}", n, words);

            // "yirmi bir bin" is fine, a leading "bir bin" is not
            let thousands = cardinal(n * 1000);
            assert!(!thousands.starts_with("bir bin"), "{} -> {}", n * 1000, thousands);
            assert!(!thousands.contains("bir yüz"), "{} -> {}", n * 1000, thousands);
        }
    }

    #[test]
    fn test_magnitude_overflow() {
        assert_eq!(cardinal(1_000_000_000_000_000_000_000), "");
        assert_eq!(cardinal(u128::MAX), "");
        assert!(!cardinal_digits(&"9".repeat(21)).is_empty());
        assert_eq!(cardinal_digits(&"9".repeat(22)), "");
    }

    #[test]
    fn test_leading_zeros_and_invalid_input() {
        assert_eq!(cardinal_digits("007"), "yedi");
        assert_eq!(cardinal_digits(&format!("{}1", "0".repeat(40))), "bir");
        assert_eq!(cardinal_digits(""), "");
        assert_eq!(cardinal_digits("12a"), "");
    }
}
