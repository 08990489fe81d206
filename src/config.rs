// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::numerals::Stage;

// ============================================================================
// Global config lock
// ============================================================================

lazy_static::lazy_static! {
    /// Global config lock
    ///
    /// Guards load -> modify -> save sequences so concurrent writers do not
    /// drop each other's changes.
    ///
    /// ```ignore
    /// let _guard = CONFIG_LOCK.lock().unwrap();
    /// let mut config = NormalizerConfig::load()?;
    /// // modify config...
    /// config.save()?;
    /// ```
    pub static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

// ============================================================================
// Normalizer configuration
// ============================================================================

fn default_enabled_stages() -> Vec<Stage> {
    Stage::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

/// Numeral normalizer configuration
///
/// Stages always run in pipeline order; `enabled_stages` only selects which
/// of them run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Stages to run (default: all of them)
    #[serde(default = "default_enabled_stages")]
    pub enabled_stages: Vec<Stage>,
    /// Apply Unicode NFC to the input before matching
    #[serde(default)]
    pub unicode_nfc: bool,
    /// Keep per-substitution records in the result
    #[serde(default = "default_true")]
    pub record_replacements: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self {
            enabled_stages: default_enabled_stages(),
            unicode_nfc: false,
            record_replacements: true,
        }
    }

    /// Whether a stage is enabled
    pub fn is_enabled(&self, stage: Stage) -> bool {
        self.enabled_stages.contains(&stage)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("cannot determine config directory"))?;
        let app_dir = config_dir.join("TurkishNumerals");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// Loads the config from the default location
    ///
    /// Missing file → defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the config from `path`
    ///
    /// Missing file → defaults. Missing fields take their defaults and
    /// unknown fields are ignored.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from {:?}", path);

        if !path.exists() {
            tracing::warn!("Config file not found, using defaults");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        let config: NormalizerConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {:?}", path))?;

        if config.enabled_stages.is_empty() {
            tracing::warn!("Config enables no stages; text will pass through unchanged");
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Writes the config atomically: temp file, backup, rename
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("Saving config to {:?}", path);

        let temp_path = path.with_extension("json.tmp");
        let backup_path = path.with_extension("json.bak");

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("Failed to write temp file: {}", e);
            e
        })?;

        if path.exists() {
            if backup_path.exists() {
                let _ = std::fs::remove_file(&backup_path);
            }
            std::fs::rename(path, &backup_path).map_err(|e| {
                tracing::error!("Failed to back up old config: {}", e);
                e
            })?;
        }

        match std::fs::rename(&temp_path, path) {
            Ok(_) => {
                let _ = std::fs::remove_file(&backup_path);
                tracing::info!("Config saved");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to move temp file into place: {}", e);
                if backup_path.exists() {
                    if let Err(restore_err) = std::fs::rename(&backup_path, path) {
                        tracing::error!("Failed to restore backup: {}", restore_err);
                    } else {
                        tracing::info!("Restored previous config from backup");
                    }
                }
                Err(e.into())
            }
        }
    }
}
