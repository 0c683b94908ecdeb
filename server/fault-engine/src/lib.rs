//! FaultWatch Fault Engine — deterministic recurring-fault detection.
//!
//! Parses a marker-delimited controller log segment into typed fault events,
//! applies the description-merge rule, groups by (aisle, level, description),
//! and collapses 90-minute chains of repeats into single representative
//! records with occurrence counts.
//!
//! No DB, no network; pure computation over one segment per invocation.

pub mod config;
pub mod engine;
pub mod error;
pub mod level;
pub mod parse;
pub mod types;
pub mod window;

pub use config::Config;
pub use engine::{Engine, SegmentReport};
pub use error::{RowError, RowErrorKind};
pub use types::{FaultEvent, Level, OccurrenceCluster};
