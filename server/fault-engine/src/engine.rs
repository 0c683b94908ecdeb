//! Batch orchestration: parse then window, one segment per invocation.

use crate::config::Config;
use crate::error::RowError;
use crate::parse;
use crate::types::OccurrenceCluster;
use crate::window;

/// The recurring-fault engine. Stateless across runs: every invocation
/// re-derives the report from the full segment, so there is no incremental
/// state to carry between scheduled runs.
pub struct Engine {
  config: Config,
}

/// Everything one segment produced.
#[derive(Debug, Clone)]
pub struct SegmentReport {
  /// Recurring clusters, newest first.
  pub clusters: Vec<OccurrenceCluster>,
  /// Rows skipped with their individual reasons.
  pub skipped: Vec<RowError>,
  /// Non-blank rows seen in the segment, including skipped and inactive ones.
  pub rows_seen: usize,
  /// Events that survived parsing and filtering.
  pub events_retained: usize,
}

impl SegmentReport {
  /// True when the segment held no rows at all — distinct from "rows parsed
  /// but nothing recurred", which leaves `clusters` empty with `rows_seen > 0`.
  pub fn is_no_data(&self) -> bool {
    self.rows_seen == 0
  }
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Run the full pipeline over one source's segment rows.
  pub fn process_segment<'a, I>(&self, rows: I, cpf: &str) -> SegmentReport
  where
    I: IntoIterator<Item = &'a str>,
  {
    let parsed = parse::parse_segment(rows, cpf);
    let clusters = window::window_faults(&parsed.events, &self.config);
    SegmentReport {
      clusters,
      skipped: parsed.skipped,
      rows_seen: parsed.rows_seen,
      events_retained: parsed.events.len(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn active_row(when: &str) -> String {
    format!("*,{when},2,AI03,STORAGE LEVEL 5 FAULT,A1,E100,Belt Jam,,Z,L1,L2,X,Y")
  }

  #[test]
  fn no_rows_at_all_is_no_data() {
    let engine = Engine::with_defaults();
    let report = engine.process_segment([], "1.8");
    assert!(report.is_no_data());
    assert!(report.clusters.is_empty());
  }

  #[test]
  fn filtered_empty_is_not_no_data() {
    let engine = Engine::with_defaults();
    let row = active_row("2025-03-14 10:00:00");
    let report = engine.process_segment([row.as_str()], "1.8");
    assert!(!report.is_no_data());
    assert_eq!(report.rows_seen, 1);
    assert_eq!(report.events_retained, 1);
    assert!(report.clusters.is_empty());
  }

  #[test]
  fn skipped_rows_are_surfaced() {
    let engine = Engine::with_defaults();
    let good = active_row("2025-03-14 10:00:00");
    let report = engine.process_segment(["bad,row", good.as_str()], "1.8");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 1);
    assert_eq!(report.events_retained, 1);
  }

  #[test]
  fn repeated_runs_serialize_identically() {
    let rows = [
      active_row("2025-03-14 10:00:00"),
      active_row("2025-03-14 10:30:00"),
      active_row("2025-03-14 11:00:00"),
    ];
    let engine = Engine::with_defaults();
    let first = engine.process_segment(rows.iter().map(String::as_str), "1.8");
    let second = engine.process_segment(rows.iter().map(String::as_str), "1.8");
    let json1 = serde_json::to_string(&first.clusters).unwrap();
    let json2 = serde_json::to_string(&second.clusters).unwrap();
    assert_eq!(json1, json2);
  }
}
