//! Core types for the fault engine (raw rows, canonical events, output contract).

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Inbound types (what the segment locator hands us)
// ---------------------------------------------------------------------------

/// Fields per row as logged by the controller.
pub const ROW_FIELD_COUNT: usize = 14;

/// One line of the ingested table below the section marker. Of the 14
/// positional fields, the last five (shuttle Z, two label fields, two command
/// fields) are discarded at this boundary and never referenced again.
#[derive(Debug, Clone, Copy)]
pub struct RawLogRow<'a> {
  pub flag: &'a str,
  pub timestamp: &'a str,
  pub duration_min: &'a str,
  pub source: &'a str,
  pub alarm_description: &'a str,
  pub area: &'a str,
  pub code: &'a str,
  pub error_description: &'a str,
  pub shuttle_position: &'a str,
}

// ---------------------------------------------------------------------------
// Level (tagged variant)
// ---------------------------------------------------------------------------

/// Physical level a fault was reported on. Faults that cannot be pinned to a
/// numeric level are classified as a whole-aisle fault, which is a grouping
/// key distinct from every numeric level.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
  Numeric(u32),
  AisleFault,
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Numeric(n) => write!(f, "{}", n),
      Self::AisleFault => write!(f, "Aisle Fault"),
    }
  }
}

/// Report contract: numeric levels are JSON numbers, the symbolic
/// classification is the string "Aisle Fault".
impl Serialize for Level {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Numeric(n) => serializer.serialize_u32(*n),
      Self::AisleFault => serializer.serialize_str("Aisle Fault"),
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical internal event after parsing, merging, and filtering. Only rows
/// carrying the controller's active marker survive to this point.
#[derive(Debug, Clone)]
pub struct FaultEvent {
  pub flag: char,
  pub timestamp: NaiveDateTime,
  pub source: String,
  /// Derived from `source` via the fixed AI## pattern.
  pub aisle: u8,
  pub duration_min: String,
  pub area: String,
  pub code: String,
  pub alarm_description: String,
  /// Possibly rewritten by the shuttle-position merge rule.
  pub error_description: String,
  pub level: Level,
  /// Batch-constant cases-per-fault value; report context only, never grouped on.
  pub cpf: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One retained representative of a within-window chain of same-class faults:
/// the most recent event of the chain, annotated with how often it recurred.
/// Immutable once created; the report table is exactly the set of clusters
/// with `occurrences_within_90_minutes >= 2`, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceCluster {
  pub aisle: u8,
  pub level: Level,
  pub error_description: String,
  #[serde(serialize_with = "serialize_minute")]
  pub timestamp: NaiveDateTime,
  pub occurrences_within_90_minutes: u64,
  pub spans_multiple_levels: bool,
  pub cpf: String,
}

/// Report timestamps are minute-precision strings ("YYYY-MM-DD HH:MM").
fn serialize_minute<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&ts.format("%Y-%m-%d %H:%M").to_string())
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for skipped rows (one JSON line per skip).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<usize>,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      line: None,
      message: message.into(),
    }
  }

  pub fn with_line(mut self, line: usize) -> Self {
    self.line = Some(line);
    self
  }
}

/// Emitted by the binary when the segment held no rows at all, so callers can
/// tell "no data" apart from "nothing recurred".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoDataOutput {
  pub no_data: bool,
}
