//! Error types for the fallible surfaces of the crate.
//!
//! Theme operations themselves never fail: storage problems are logged and
//! absorbed by the store. These errors surface only where a caller asked for
//! something concrete (opening a storage file, loading a config, rendering a
//! layout template).

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by a [`PreferenceStorage`](crate::storage::PreferenceStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("storage io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a JSON object of strings.
    #[error("storage file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refuses the operation (read-only, quota exhausted, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error raised while loading a [`DashboardConfig`](crate::config::DashboardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("tablet breakpoint ({tablet}) exceeds web breakpoint ({web})")]
    UnorderedBreakpoints { tablet: u32, web: u32 },

    #[error("storage key for '{field}' must not be empty")]
    EmptyStorageKey { field: &'static str },
}

/// Error raised while rendering a layout shell.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout template error: {0}")]
    Template(#[from] minijinja::Error),
}
