//! Report layout configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::issue::DEFAULT_DELIMITER;
use crate::style::Palette;

/// Narrowest width leaving room for the error marker and one character.
pub const MIN_WIDTH: usize = 4;

/// Everything that shapes the rendered report.
///
/// Missing fields in a config file take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Target column count for dividers and dot padding.
    pub width: usize,
    /// Spaces per indentation level.
    pub tab_size: usize,
    /// Token separating a group label from its detail.
    pub delimiter: String,
    pub palette: Palette,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width: 80,
            tab_size: 2,
            delimiter: DEFAULT_DELIMITER.to_string(),
            palette: Palette::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        log::debug!(
            "loaded report config: width={} tab_size={}",
            config.width,
            config.tab_size
        );
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(ReportError::Config(format!(
                "width must be at least {MIN_WIDTH}, got {}",
                self.width
            )));
        }
        if self.tab_size == 0 {
            return Err(ReportError::Config("tab_size must be positive".into()));
        }
        if self.delimiter.is_empty() {
            return Err(ReportError::Config("delimiter must not be empty".into()));
        }
        self.palette.validate()
    }
}
