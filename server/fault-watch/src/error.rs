//! Error types for the watcher. Per-location failures are logged and
//! swallowed by the scheduler loop; one bad batch never prevents the next
//! scheduled run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
  #[error("{}: {}", .path.display(), .source)]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("section marker {:?} not found in {}", .marker, .path.display())]
  MarkerNotFound { marker: &'static str, path: PathBuf },

  #[error("cases-per-fault value not found in {}", .path.display())]
  CpfNotFound { path: PathBuf },

  #[error("config {}: {}", .path.display(), .reason)]
  Config { path: PathBuf, reason: String },
}
