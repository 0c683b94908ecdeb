//! Watcher configuration: the explicit location registry.
//!
//! The registry is loaded from a JSON file and passed into each run; nothing
//! in the pipeline reaches for a global location table.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::WatchError;

/// One physical location: a display name plus the directory its controller
/// drops dated fault logs into.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
  pub name: String,
  pub source_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
  pub locations: Vec<LocationConfig>,
  /// Where the per-location HTML pages are written.
  pub output_dir: PathBuf,
  /// Seconds between runs.
  #[serde(default = "default_interval_secs")]
  pub interval_secs: u64,
  /// Dated-file suffix appended to YYYYMMDD.
  #[serde(default = "default_file_suffix")]
  pub file_suffix: String,
}

fn default_interval_secs() -> u64 {
  300
}

fn default_file_suffix() -> String {
  "-DMSFaults.csv".to_string()
}

impl WatchConfig {
  pub fn load(path: &Path) -> Result<Self, WatchError> {
    let contents = fs::read_to_string(path).map_err(|source| WatchError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&contents).map_err(|e| WatchError::Config {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })
  }
}
