//! Raw segment locator: dated-file resolution, section-marker scan, CPF
//! extraction. Pure except for the single file read.

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::error::WatchError;

/// Marker line opening the fault table; rows start on the next line.
pub const SEGMENT_MARKER: &str = "*** UB Faults ***";
/// Marker line for the cases-per-fault section; the value sits a fixed number
/// of lines below it.
pub const CPF_MARKER: &str = "Cases per Fault";
pub const CPF_LINE_OFFSET: usize = 3;

/// The controller starts writing tomorrow's file at 20:30.
const ROLLOVER_HOUR: u32 = 20;
const ROLLOVER_MINUTE: u32 = 30;

/// Name of the file the controller is currently writing, `YYYYMMDD<suffix>`.
pub fn dated_file_name(now: NaiveDateTime, suffix: &str) -> String {
  let past_rollover = now.hour() > ROLLOVER_HOUR
    || (now.hour() == ROLLOVER_HOUR && now.minute() >= ROLLOVER_MINUTE);
  let date = if past_rollover {
    now.date() + Duration::days(1)
  } else {
    now.date()
  };
  format!("{}{}", date.format("%Y%m%d"), suffix)
}

/// One located segment: every row strictly below the section marker (the
/// controller's column-header line included; the parser's flag filter
/// disposes of it) plus the CPF scalar.
#[derive(Debug, Clone)]
pub struct RawSegment {
  pub rows: Vec<String>,
  pub cpf: String,
}

/// Read the dated file and cut the fault segment out of it.
pub fn load_segment(path: &Path) -> Result<RawSegment, WatchError> {
  let contents = fs::read_to_string(path).map_err(|source| WatchError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let lines: Vec<&str> = contents.lines().collect();

  let marker_idx = lines
    .iter()
    .position(|l| l.contains(SEGMENT_MARKER))
    .ok_or_else(|| WatchError::MarkerNotFound {
      marker: SEGMENT_MARKER,
      path: path.to_path_buf(),
    })?;

  let cpf = lines
    .iter()
    .position(|l| l.contains(CPF_MARKER))
    .and_then(|idx| lines.get(idx + CPF_LINE_OFFSET))
    .map(|l| l.trim().to_string())
    .filter(|v| !v.is_empty())
    .ok_or_else(|| WatchError::CpfNotFound {
      path: path.to_path_buf(),
    })?;

  let rows = lines[marker_idx + 1..]
    .iter()
    .map(|l| l.to_string())
    .collect();
  Ok(RawSegment { rows, cpf })
}
