//! Configuration Module
//! Analysis constants with optional JSON overrides.

use crate::charts::MAX_IMAGE_SIDE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "student_insight.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables shared by both applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of histogram bins for the grade distribution.
    pub histogram_bins: usize,
    /// Number of evaluation points for the density curve.
    pub kde_grid_size: usize,
    /// Share of rows held out for testing the regression.
    pub test_fraction: f64,
    pub split_seed: u64,
    pub preview_rows: usize,
    /// Rows scanned when inferring CSV column types.
    pub infer_schema_length: usize,
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            kde_grid_size: 200,
            test_fraction: 0.2,
            split_seed: 42,
            preview_rows: 5,
            infer_schema_length: 10_000,
            export_width: 800,
            export_height: 600,
        }
    }
}

impl AppConfig {
    /// Parse a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `student_insight.json` from the working directory if present.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(ConfigError::Invalid("histogram_bins must be positive".into()));
        }
        if self.kde_grid_size < 2 {
            return Err(ConfigError::Invalid("kde_grid_size must be at least 2".into()));
        }
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ConfigError::Invalid(
                "test_fraction must be between 0 and 1".into(),
            ));
        }
        let side_ok = |side: u32| (1..=MAX_IMAGE_SIDE).contains(&side);
        if !side_ok(self.export_width) || !side_ok(self.export_height) {
            return Err(ConfigError::Invalid(format!(
                "export size must be between 1 and {MAX_IMAGE_SIDE} pixels per side"
            )));
        }
        Ok(())
    }
}
