//! Binary entrypoint: raw segment rows on stdin, JSON lines on stdout.
//!
//! The CPF scalar comes in as the first argument (the segment locator owns
//! finding it; "N/A" when absent). Output lines are either:
//! - An ErrorOutput (one per skipped row)
//! - An OccurrenceCluster (one per retained cluster, newest first)
//! - A single NoDataOutput when stdin held no rows at all

use fault_engine::types::{ErrorOutput, NoDataOutput};
use fault_engine::Engine;
use std::io::{self, BufRead, Write};

fn main() {
  let cpf = std::env::args().nth(1).unwrap_or_else(|| "N/A".to_string());

  let stdin = io::stdin();
  let mut rows = Vec::new();
  for line in stdin.lock().lines() {
    match line {
      Ok(l) => rows.push(l),
      Err(e) => {
        let _ = writeln!(io::stderr(), "fault-engine: read error: {}", e);
        std::process::exit(1);
      }
    }
  }

  let engine = Engine::with_defaults();
  let report = engine.process_segment(rows.iter().map(String::as_str), &cpf);

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  if report.is_no_data() {
    let _ = serde_json::to_writer(&mut out, &NoDataOutput { no_data: true });
    let _ = writeln!(out);
    let _ = out.flush();
    return;
  }

  for skip in &report.skipped {
    let err = ErrorOutput::new(skip.kind.to_string()).with_line(skip.line);
    let _ = serde_json::to_writer(&mut out, &err);
    let _ = writeln!(out);
  }
  for cluster in &report.clusters {
    let _ = serde_json::to_writer(&mut out, cluster);
    let _ = writeln!(out);
  }

  let _ = out.flush();
}
