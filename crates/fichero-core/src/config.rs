//! Store configuration.
//!
//! Loaded from `config.toml` in the app home directory. Every field is
//! optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Name of the records directory created under the app home by default.
pub const DEFAULT_RECORDS_DIR: &str = "clientes";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the records directory (absolute path). When unset the store
    /// uses `<home>/clientes`.
    pub records_dir: Option<PathBuf>,
}

impl Config {
    /// Load `config.toml` from `app_dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load(app_dir: &Path) -> io::Result<Config> {
        let path = app_dir.join("config.toml");
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("Failed to parse config: {}", e),
            )
        })
    }

    /// Records directory for this configuration.
    pub fn records_dir(&self, app_dir: &Path) -> PathBuf {
        self.records_dir
            .clone()
            .unwrap_or_else(|| app_dir.join(DEFAULT_RECORDS_DIR))
    }
}
