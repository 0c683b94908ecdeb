//! Occurrence-Window Engine: collapse temporally-dense repeats of the same
//! fault into a single representative record with an occurrence count.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::Config;
use crate::types::{FaultEvent, Level, OccurrenceCluster};

/// Group events by (aisle, level, description), chain each group on the
/// recency window, and keep the most recent event of every chain that
/// recurred.
///
/// Within a group, events are walked newest-first. The window test is always
/// against the immediately preceding event, never against the chain's start,
/// so a chain can drift forward indefinitely as long as consecutive gaps stay
/// within the window. A gap strictly greater than `config.window_secs`
/// starts a new chain; equality at the threshold keeps the chain open.
///
/// Chains shorter than `config.min_occurrences` are dropped: a fault that
/// occurred once in isolation is not recurring and never reaches the report.
pub fn window_faults(events: &[FaultEvent], config: &Config) -> Vec<OccurrenceCluster> {
  // BTreeMap keeps group order deterministic, so identical inputs always
  // produce identical output sequences.
  let mut groups: BTreeMap<(u8, &Level, &str), Vec<&FaultEvent>> = BTreeMap::new();
  for event in events {
    groups
      .entry((event.aisle, &event.level, event.error_description.as_str()))
      .or_default()
      .push(event);
  }

  let mut clusters = Vec::new();
  for (_, mut group) in groups {
    group.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut chain_start = 0;
    for i in 1..group.len() {
      let gap = (group[i - 1].timestamp - group[i].timestamp).num_seconds();
      if gap > config.window_secs {
        push_chain(&group[chain_start..i], config, &mut clusters);
        chain_start = i;
      }
    }
    if !group.is_empty() {
      push_chain(&group[chain_start..], config, &mut clusters);
    }
  }

  // Newest first; ties broken by the grouping key so ordering never depends
  // on input order.
  clusters.sort_by(|a, b| {
    b.timestamp
      .cmp(&a.timestamp)
      .then_with(|| a.aisle.cmp(&b.aisle))
      .then_with(|| a.level.cmp(&b.level))
      .then_with(|| a.error_description.cmp(&b.error_description))
  });
  clusters
}

/// Collapse one maximal within-window chain (newest first, never empty) to
/// its most recent event, carrying the chain's length and whether more than
/// one distinct level value was seen along it. Level is part of the grouping
/// key, so the flag records same-group collisions only; the mechanism is kept
/// as the windowing walk defines it.
fn push_chain(chain: &[&FaultEvent], config: &Config, clusters: &mut Vec<OccurrenceCluster>) {
  if (chain.len() as u64) < config.min_occurrences {
    return;
  }
  let newest = chain[0];
  let levels_seen: BTreeSet<&Level> = chain.iter().map(|e| &e.level).collect();
  clusters.push(OccurrenceCluster {
    aisle: newest.aisle,
    level: newest.level.clone(),
    error_description: newest.error_description.clone(),
    timestamp: newest.timestamp,
    occurrences_within_90_minutes: chain.len() as u64,
    spans_multiple_levels: levels_seen.len() > 1,
    cpf: newest.cpf.clone(),
  });
}
