//! Dashboard configuration.
//!
//! Every field has a default, so an empty document (or no file at all) yields
//! the stock behavior: 768/1024 breakpoints, `theme`/`themeColor` storage
//! keys, light fallback mode and in-memory storage.
//!
//! ```yaml
//! breakpoints:
//!   tablet: 768
//!   web: 1024
//! storage_keys:
//!   mode: theme
//!   accent_color: themeColor
//! fallback_mode: system
//! storage_path: ~/.local/state/dashboard/prefs.json
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::device::Breakpoints;
use crate::error::ConfigError;
use crate::theme::FallbackMode;

/// Storage key names for the two persisted preference fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub mode: String,
    pub accent_color: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            mode: "theme".to_string(),
            accent_color: "themeColor".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub breakpoints: Breakpoints,
    pub storage_keys: StorageKeys,
    pub fallback_mode: FallbackMode,
    /// JSON preference file. `None` keeps preferences in memory only.
    pub storage_path: Option<PathBuf>,
}

impl DashboardConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = if source.trim().is_empty() {
            DashboardConfig::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&source)?;
        config.storage_path = config.storage_path.map(expand_home);
        log::debug!("loaded dashboard config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoints.is_ordered() {
            return Err(ConfigError::UnorderedBreakpoints {
                tablet: self.breakpoints.tablet,
                web: self.breakpoints.web,
            });
        }
        if self.storage_keys.mode.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey { field: "mode" });
        }
        if self.storage_keys.accent_color.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey {
                field: "accent_color",
            });
        }
        Ok(())
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path,
    }
}
