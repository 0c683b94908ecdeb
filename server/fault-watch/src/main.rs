//! Binary entrypoint: load the location registry, then process every
//! location on a fixed interval.
//!
//! Usage:
//!   fault-watch [config.json]         # run forever (default locations.json)
//!   fault-watch [config.json] --once  # single pass, for cron or smoke tests
//!
//! A failed location leaves its previous page in place and is retried on the
//! next run; skipped rows are logged individually.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Local;
use log::{error, info, warn};

use fault_engine::Engine;
use fault_watch::config::{LocationConfig, WatchConfig};
use fault_watch::error::WatchError;
use fault_watch::{locate, render};

fn main() {
  env_logger::init();

  let mut args: Vec<String> = std::env::args().skip(1).collect();
  let once = if let Some(idx) = args.iter().position(|a| a == "--once") {
    args.remove(idx);
    true
  } else {
    false
  };
  let config_path = args.first().map(String::as_str).unwrap_or("locations.json");

  let config = match WatchConfig::load(Path::new(config_path)) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("fault-watch: {}", e);
      std::process::exit(2);
    }
  };

  let engine = Engine::with_defaults();
  loop {
    run_all(&engine, &config);
    if once {
      break;
    }
    thread::sleep(Duration::from_secs(config.interval_secs));
  }
}

fn run_all(engine: &Engine, config: &WatchConfig) {
  let names: Vec<String> = config.locations.iter().map(|l| l.name.clone()).collect();
  for location in &config.locations {
    if let Err(e) = run_location(engine, config, location, &names) {
      error!("{}: {}", location.name, e);
    }
  }
}

fn run_location(
  engine: &Engine,
  config: &WatchConfig,
  location: &LocationConfig,
  all_names: &[String],
) -> Result<(), WatchError> {
  let file_name = locate::dated_file_name(Local::now().naive_local(), &config.file_suffix);
  let path = location.source_dir.join(file_name);
  let segment = locate::load_segment(&path)?;

  let report = engine.process_segment(segment.rows.iter().map(String::as_str), &segment.cpf);
  for skip in &report.skipped {
    warn!("{}: skipped {}", location.name, skip);
  }
  info!(
    "{}: {} rows, {} events, {} recurring clusters",
    location.name,
    report.rows_seen,
    report.events_retained,
    report.clusters.len()
  );

  let html = render::render_page(&location.name, all_names, &report.clusters, &segment.cpf);
  let out_path = config.output_dir.join(render::page_file_name(&location.name));
  fs::write(&out_path, html).map_err(|source| WatchError::Io {
    path: out_path.clone(),
    source,
  })?;
  Ok(())
}
