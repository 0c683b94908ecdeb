//! Structured error types for the fault engine.

use thiserror::Error;

/// Why a single row was skipped. Row errors never abort the batch; the whole
/// segment is processed and every skip is reported individually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
  #[error("expected {expected} fields, found {found}")]
  FieldCount { expected: usize, found: usize },

  #[error("unparseable timestamp: {0:?}")]
  Timestamp(String),

  #[error("no AI## aisle number in source tag: {0:?}")]
  Aisle(String),
}

/// A skipped row: 1-based line number within the segment plus the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {line}: {kind}")]
pub struct RowError {
  pub line: usize,
  pub kind: RowErrorKind,
}
