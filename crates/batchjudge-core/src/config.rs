//! TOML configuration.
//!
//! ```toml
//! [batch]
//! fields = ["TITLE", "ARTIST", "STEPARTIST"]
//!
//! [template]
//! include_stepartist = false
//! unknown_artist = "UNKNOWN"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::simfile::ChartField;

pub const DEFAULT_CONFIG_FILE: &str = "batchjudge.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub batch: BatchConfig,
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Chart header fields written to the batch CSV.
    pub fields: Vec<ChartField>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            fields: ChartField::default_fields(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Append ` (stepartist)` to every template line.
    pub include_stepartist: bool,
    /// Artist written when the CSV has none.
    pub unknown_artist: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            include_stepartist: false,
            unknown_artist: "UNKNOWN".to_string(),
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading config {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
