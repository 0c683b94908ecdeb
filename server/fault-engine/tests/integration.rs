//! Integration tests for the fault engine.

use fault_engine::{Config, Engine, Level, RowErrorKind};

const CPF: &str = "1.8";

/// A realistic cut of the segment below the "*** UB Faults ***" marker: the
/// controller's column-header line, a burst of shuttle-comms faults in aisle
/// 3, an isolated later repeat, an inactive row, three malformed rows, and a
/// pair of sensor-blocked faults in aisle 8.
fn fixture_rows() -> Vec<&'static str> {
  vec![
    "F,Date/Time,Duration(min),Source,Alarm Description,Area,Code,ErrorDescription,ShuttleX,ShuttleZ,Label1,Label2,XY_CMD,LZ_CMD",
    "*,2025-03-14 11:00:00,2,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "*,2025-03-14 10:30:00,1,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "*,2025-03-14 10:00:00,1,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "*,2025-03-14 13:00:00,4,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    ",2025-03-14 10:05:00,1,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "*,not a timestamp,1,AI03-PLC,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "*,2025-03-14 10:10:00,1,PLC-NO-AISLE,STORAGE LEVEL 5 FAULT,A1,E100,No Communications with Shuttle,SH12,Z,L1,L2,X,Y",
    "short,row",
    "*,2025-03-14 09:00:00,1,AI08-PLC,CRANE LV04 COMMS,A2,E200,Sensor Blocked,AB12,Z,L1,L2,X,Y",
    "*,2025-03-14 09:40:00,1,AI08-PLC,CRANE LV04 COMMS,A2,E200,Sensor Blocked,AB12,Z,L1,L2,X,Y",
  ]
}

#[test]
fn full_segment_end_to_end() {
  let engine = Engine::with_defaults();
  let report = engine.process_segment(fixture_rows(), CPF);

  assert_eq!(report.rows_seen, 11);
  assert_eq!(report.events_retained, 6);

  // Newest first: the aisle-3 burst collapses to its most recent event; the
  // 13:00 repeat is 120 minutes out and suppressed as a singleton.
  assert_eq!(report.clusters.len(), 2);

  let first = &report.clusters[0];
  assert_eq!(first.aisle, 3);
  assert_eq!(first.level, Level::Numeric(5));
  assert_eq!(first.error_description, "No Communications with Shuttle");
  assert_eq!(first.occurrences_within_90_minutes, 3);
  assert_eq!(first.cpf, CPF);

  let second = &report.clusters[1];
  assert_eq!(second.aisle, 8);
  assert_eq!(second.level, Level::Numeric(4));
  assert_eq!(second.error_description, "Sensor Blocked, AB12");
  assert_eq!(second.occurrences_within_90_minutes, 2);

  assert!(first.timestamp > second.timestamp);
}

#[test]
fn every_skip_is_reported_individually() {
  let engine = Engine::with_defaults();
  let report = engine.process_segment(fixture_rows(), CPF);

  assert_eq!(report.skipped.len(), 3);
  assert_eq!(report.skipped[0].line, 7);
  assert!(matches!(report.skipped[0].kind, RowErrorKind::Timestamp(_)));
  assert_eq!(report.skipped[1].line, 8);
  assert!(matches!(report.skipped[1].kind, RowErrorKind::Aisle(_)));
  assert_eq!(report.skipped[2].line, 9);
  assert!(matches!(
    report.skipped[2].kind,
    RowErrorKind::FieldCount { found: 2, .. }
  ));
}

#[test]
fn serialized_contract_fields() {
  let engine = Engine::with_defaults();
  let report = engine.process_segment(fixture_rows(), CPF);
  let json = serde_json::to_string(&report.clusters[0]).unwrap();

  assert!(json.contains("\"aisle\":3"));
  assert!(json.contains("\"level\":5"));
  assert!(json.contains("\"errorDescription\":\"No Communications with Shuttle\""));
  assert!(json.contains("\"timestamp\":\"2025-03-14 11:00\""));
  assert!(json.contains("\"occurrencesWithin90Minutes\":3"));
  assert!(json.contains(&format!("\"cpf\":\"{}\"", CPF)));
}

#[test]
fn deterministic_output_across_runs() {
  let engine1 = Engine::with_defaults();
  let engine2 = Engine::with_defaults();
  let json1 = serde_json::to_string(&engine1.process_segment(fixture_rows(), CPF).clusters).unwrap();
  let json2 = serde_json::to_string(&engine2.process_segment(fixture_rows(), CPF).clusters).unwrap();
  assert_eq!(json1, json2, "same segment must serialize identically");
}

#[test]
fn no_data_is_distinguishable_from_filtered_empty() {
  let engine = Engine::with_defaults();

  let empty = engine.process_segment([], CPF);
  assert!(empty.is_no_data());

  let header_only = engine.process_segment(
    ["F,Date/Time,Duration(min),Source,Alarm Description,Area,Code,ErrorDescription,ShuttleX,ShuttleZ,Label1,Label2,XY_CMD,LZ_CMD"],
    CPF,
  );
  assert!(!header_only.is_no_data());
  assert!(header_only.clusters.is_empty());
}

#[test]
fn wider_window_merges_what_the_default_splits() {
  // With the default window the 13:00 event is isolated; at 150 minutes it
  // chains onto the burst and the cluster follows the most recent event.
  let engine = Engine::new(Config {
    window_secs: 9000,
    ..Config::default()
  });
  let report = engine.process_segment(fixture_rows(), CPF);
  let aisle3 = report
    .clusters
    .iter()
    .find(|c| c.aisle == 3)
    .expect("aisle 3 cluster");
  assert_eq!(aisle3.occurrences_within_90_minutes, 4);
  assert_eq!(
    aisle3.timestamp.format("%Y-%m-%d %H:%M").to_string(),
    "2025-03-14 13:00"
  );
}
