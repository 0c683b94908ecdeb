//! Engine configuration with the deployed defaults.

/// Tunable thresholds for recurring-fault detection.
#[derive(Debug, Clone)]
pub struct Config {
  /// Recency window in seconds. A gap at or under this keeps a chain open; a
  /// strictly larger gap starts a new chain.
  pub window_secs: i64,
  /// Minimum chain length for a cluster to appear in the report.
  pub min_occurrences: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      window_secs: 5400,
      min_occurrences: 2,
    }
  }
}
