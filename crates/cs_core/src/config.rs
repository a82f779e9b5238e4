//! # Narrative layout configuration
//!
//! Wrap width for header prose and the column layout of innings tables.
//! Defaults reproduce the standard report; a YAML or JSON file can override them.
//!
//! ```rust
//! use cs_core::config::NarrativeConfig;
//!
//! let config = NarrativeConfig::default();
//! assert_eq!(config.layout.wrap_width, 98);
//! ```

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, Result};
use crate::text::{Align, ColumnSpec};

/// Names a config file to use when none is passed explicitly.
pub const CONFIG_PATH_ENV: &str = "CS_NARRATIVE_CONFIG";

pub const DEFAULT_WRAP_WIDTH: usize = 98;

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NarrativeConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Column limit for the header description and squad lists.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default)]
    pub table: TableLayout,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { wrap_width: DEFAULT_WRAP_WIDTH, table: TableLayout::default() }
    }
}

/// Columns left out of a config file keep their default spec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableLayout {
    pub over: ColumnSpec,
    pub bowler: ColumnSpec,
    pub batter: ColumnSpec,
    pub delivery: ColumnSpec,
    pub remarks: ColumnSpec,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            over: ColumnSpec::new("Over", 5, Align::Center),
            bowler: ColumnSpec::new("Bowler", 15, Align::Left),
            batter: ColumnSpec::new("Batter", 15, Align::Left),
            delivery: ColumnSpec::new("Delivery", 8, Align::Center),
            remarks: ColumnSpec::new("Remarks", 45, Align::Left),
        }
    }
}

impl TableLayout {
    /// Columns in display order.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        vec![
            self.over.clone(),
            self.bowler.clone(),
            self.batter.clone(),
            self.delivery.clone(),
            self.remarks.clone(),
        ]
    }
}

impl NarrativeConfig {
    /// Parse from YAML or JSON, chosen by file extension (`.yaml`/`.yml` → YAML, else JSON).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                NarrativeError::InvalidConfig(format!("{}: {}", path.display(), e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                NarrativeError::InvalidConfig(format!("{}: {}", path.display(), e))
            })?
        };

        config.validate()?;
        log::debug!("Loaded narrative config from {}", path.display());
        Ok(config)
    }

    /// Explicit path first, then `CS_NARRATIVE_CONFIG`, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim())),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.wrap_width == 0 {
            return Err(NarrativeError::InvalidConfig("wrap_width must be positive".into()));
        }

        for column in self.layout.table.columns() {
            if column.max_width == 0 {
                return Err(NarrativeError::InvalidConfig(format!(
                    "column '{}' has zero max_width",
                    column.header
                )));
            }
            if column.min_width > column.max_width {
                return Err(NarrativeError::InvalidConfig(format!(
                    "column '{}' min_width {} exceeds max_width {}",
                    column.header, column.min_width, column.max_width
                )));
            }
        }

        Ok(())
    }
}
