//! Event Parser: raw segment rows into canonical FaultEvents.
//!
//! Pure: per-row failures are returned as data, never logged or thrown from
//! inside this component.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{RowError, RowErrorKind};
use crate::level;
use crate::types::{FaultEvent, RawLogRow, ROW_FIELD_COUNT};

/// Timestamp formats the controller has been observed to log, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M",
  "%d/%m/%Y %H:%M:%S",
  "%d/%m/%Y %H:%M",
];

fn aisle_pattern() -> &'static Regex {
  static AISLE_RE: OnceLock<Regex> = OnceLock::new();
  AISLE_RE.get_or_init(|| Regex::new(r"AI(\d{2})").expect("valid aisle regex"))
}

/// Everything the parser produced for one segment.
#[derive(Debug, Clone, Default)]
pub struct ParsedSegment {
  pub events: Vec<FaultEvent>,
  pub skipped: Vec<RowError>,
  /// Non-blank rows seen, including skipped and inactive ones.
  pub rows_seen: usize,
}

/// Parse the raw rows below the section marker, attaching the batch CPF to
/// every surviving event. Blank rows are ignored; structurally bad rows are
/// recorded in `skipped` with their 1-based line number.
pub fn parse_segment<'a, I>(rows: I, cpf: &str) -> ParsedSegment
where
  I: IntoIterator<Item = &'a str>,
{
  let mut out = ParsedSegment::default();
  for (idx, line) in rows.into_iter().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    out.rows_seen += 1;
    match parse_row(line, cpf) {
      Ok(Some(event)) => out.events.push(event),
      // Inactive row (flag != '*'); this also disposes of the column-header
      // line that follows the section marker.
      Ok(None) => {}
      Err(kind) => out.skipped.push(RowError { line: idx + 1, kind }),
    }
  }
  out
}

/// One row through the full normalization: merge, flag filter, timestamp,
/// aisle, level, CPF. `Ok(None)` is an inactive row; `Err` is a reportable skip.
fn parse_row(line: &str, cpf: &str) -> Result<Option<FaultEvent>, RowErrorKind> {
  let row = split_row(line)?;
  let error_description = merge_shuttle_position(row.error_description, row.shuttle_position);

  if row.flag != "*" {
    return Ok(None);
  }

  let timestamp = parse_timestamp(row.timestamp)
    .ok_or_else(|| RowErrorKind::Timestamp(row.timestamp.trim().to_string()))?;
  let aisle =
    extract_aisle(row.source).ok_or_else(|| RowErrorKind::Aisle(row.source.to_string()))?;
  let level = level::extract_level(row.alarm_description);

  Ok(Some(FaultEvent {
    flag: '*',
    timestamp,
    source: row.source.to_string(),
    aisle,
    duration_min: row.duration_min.to_string(),
    area: row.area.to_string(),
    code: row.code.to_string(),
    alarm_description: row.alarm_description.to_string(),
    error_description,
    level,
    cpf: cpf.to_string(),
  }))
}

/// Split a raw line into its positional fields. Any shape other than exactly
/// 14 comma-separated fields is a structural row error.
fn split_row(line: &str) -> Result<RawLogRow<'_>, RowErrorKind> {
  let fields: Vec<&str> = line.split(',').collect();
  if fields.len() != ROW_FIELD_COUNT {
    return Err(RowErrorKind::FieldCount {
      expected: ROW_FIELD_COUNT,
      found: fields.len(),
    });
  }
  Ok(RawLogRow {
    flag: fields[0],
    timestamp: fields[1],
    duration_min: fields[2],
    source: fields[3],
    alarm_description: fields[4],
    area: fields[5],
    code: fields[6],
    error_description: fields[7],
    shuttle_position: fields[8],
  })
}

/// Disambiguate the error description with the shuttle-position field: merged
/// when the field is present and non-numeric, or when the description names a
/// sensor-blocked / shuttle-load-overhang fault. The field itself is dropped
/// afterwards and never reaches downstream data.
fn merge_shuttle_position(error_description: &str, shuttle_position: &str) -> String {
  if shuttle_position.trim().is_empty() {
    return error_description.to_string();
  }
  let lower = error_description.to_lowercase();
  let no_digit = !shuttle_position.chars().any(|c| c.is_ascii_digit());
  if no_digit || lower.contains("sensor blocked") || lower.contains("shuttle load overhang") {
    format!("{}, {}", error_description, shuttle_position)
  } else {
    error_description.to_string()
  }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
  let text = text.trim();
  TIMESTAMP_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

fn extract_aisle(source: &str) -> Option<u8> {
  aisle_pattern()
    .captures(source)
    .and_then(|caps| caps[1].parse::<u8>().ok())
}
