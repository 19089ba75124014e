//! Composer configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bitchat_commands::{CommandContext, StringTable};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with localized string overrides
    pub strings_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Start in a geo public channel
    pub is_geo_public: bool,
    /// Start in a geo direct message
    pub is_geo_dm: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            strings_path: None,
            log_filter: "info".to_string(),
            is_geo_public: false,
            is_geo_dm: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Install the global subscriber using `log_filter`
    pub fn init_logging(&self) -> Result<()> {
        crate::parse_filter(&self.log_filter)?;
        crate::init_logging(&self.log_filter)
    }

    pub fn context(&self) -> CommandContext {
        CommandContext::new(self.is_geo_public, self.is_geo_dm)
    }

    /// English labels overlaid with the strings file, if configured
    pub fn localizer(&self) -> Result<StringTable> {
        let mut table = StringTable::english();

        if let Some(path) = &self.strings_path {
            let contents = std::fs::read_to_string(path)?;
            let overrides = StringTable::from_json(&contents)?;
            tracing::info!(
                path = %path.display(),
                count = overrides.len(),
                "Loaded string overrides"
            );
            table.merge(overrides);
        }

        Ok(table)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
