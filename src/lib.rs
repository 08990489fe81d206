//! Turkish numeral normalizer
//!
//! Spells out cardinals, ordinals, percentages, decimals and
//! thousands-grouped numbers embedded in Turkish text.
//!
//! ```
//! use turkish_numerals_lib::normalize;
//!
//! assert_eq!(normalize("3,5 kilo"), "üç buçuk kilo");
//! assert_eq!(normalize("1.000 kişi"), "bin kişi");
//! ```

pub mod config;
pub mod numerals;

pub use config::{NormalizerConfig, CONFIG_LOCK};
pub use numerals::{NormalizationResult, Numeral, NumeralEngine, Replacement, Stage};

lazy_static::lazy_static! {
    /// Engine with every stage enabled, shared by [`normalize`]
    static ref DEFAULT_ENGINE: NumeralEngine = NumeralEngine::default();
}

/// Rewrites every numeral in `text` as Turkish words
///
/// Runs all seven stages with the default configuration. Never fails;
/// numerals beyond the magnitude table are dropped from the output.
pub fn normalize(text: &str) -> String {
    DEFAULT_ENGINE.normalize(text).text
}

/// Initializes logging
///
/// Filter comes from `RUST_LOG` (default `warn`). Safe to call more than
/// once; later calls are ignored.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call must not panic
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
