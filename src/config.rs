//! Persisted compatibility tables
//!
//! Extra compatibility pairs live in a JSON file:
//!
//! ```json
//! { "pairs": [["FLOAT", "INTEGER"], ["VECTOR3D", "COLOR"]] }
//! ```

use crate::compatibility::CompatibilityRegistry;
use crate::nodes::SocketType;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up inside the user configuration directory
pub const CONFIG_FILE: &str = "compatibility.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize compatibility table: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Compatibility pairs as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityConfig {
    #[serde(default)]
    pub pairs: Vec<(SocketType, SocketType)>,
}

impl CompatibilityConfig {
    /// `<config dir>/mindtree/compatibility.json`, if the platform has a
    /// config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mindtree").join(CONFIG_FILE))
    }

    /// Snapshot of every pair registered in `registry`
    pub fn from_registry(registry: &CompatibilityRegistry) -> Self {
        Self {
            pairs: registry.pairs(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Read {} compatibility pairs from {}", config.pairs.len(), path.display());
        Ok(config)
    }

    /// Like [`load_from_file`](Self::load_from_file), but a missing file
    /// yields an empty table
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No compatibility table at {}", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Writes the table as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved {} compatibility pairs to {}", self.pairs.len(), path.display());
        Ok(())
    }

    /// Registers every pair in `registry`
    pub fn apply(&self, registry: &mut CompatibilityRegistry) {
        for (a, b) in &self.pairs {
            registry.add_compatibility(a.clone(), b.clone());
        }
    }
}
