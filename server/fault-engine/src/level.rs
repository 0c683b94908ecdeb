//! Level classification from the controller's alarm description text.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Level;

fn lv_pattern() -> &'static Regex {
  static LV_RE: OnceLock<Regex> = OnceLock::new();
  LV_RE.get_or_init(|| Regex::new(r"LV(\d{2})").expect("valid LV level regex"))
}

/// Derive the level from an alarm description.
///
/// A `LEVEL` token wins: the level is the integer token following it, falling
/// back to a whole-aisle fault when that token is missing or non-numeric.
/// Otherwise a two-digit `LV##` code wins. Total — never fails.
pub fn extract_level(alarm_description: &str) -> Level {
  if alarm_description.contains("LEVEL") {
    return alarm_description
      .split_whitespace()
      .skip_while(|tok| !tok.contains("LEVEL"))
      .nth(1)
      .and_then(|tok| tok.parse::<u32>().ok())
      .map_or(Level::AisleFault, Level::Numeric);
  }
  if let Some(caps) = lv_pattern().captures(alarm_description) {
    if let Ok(n) = caps[1].parse::<u32>() {
      return Level::Numeric(n);
    }
  }
  Level::AisleFault
}
