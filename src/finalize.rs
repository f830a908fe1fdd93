// src/finalize.rs
//
// Last stop before the caller persists anything: deterministic ordering,
// the required-field filter, and the derived venue sets. Output here must
// be byte-stable across runs on identical input — the persistence
// collaborator diffs the canonical serialization to stay idempotent.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::consts::ASSET_EXT;
use crate::record::GameRecord;

/// Finished output bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleBundle {
    pub games: Vec<GameRecord>,
    /// Every distinct venue key referenced by any record, sorted.
    pub venues_needed: Vec<String>,
    /// The needed subset with no local asset, sorted.
    pub venues_missing: Vec<String>,
}

/// Sort, filter, and derive the venue sets. `asset_exists` answers whether
/// a local venue image is already on disk for a slug — the only I/O-shaped
/// question in the pipeline, and it is injected.
pub fn finalize<F>(mut games: Vec<GameRecord>, asset_exists: F) -> ScheduleBundle
where
    F: Fn(&str) -> bool,
{
    // header/footer/placeholder rows must never reach the output
    games.retain(|g| !g.opponent_name.is_empty());
    games.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    let mut needed: Vec<String> = games
        .iter()
        .map(|g| g.venue_slug.clone())
        .filter(|slug| !slug.is_empty())
        .collect();
    needed.sort();
    needed.dedup();

    let missing = needed.iter().filter(|slug| !asset_exists(slug)).cloned().collect();

    ScheduleBundle {
        games,
        venues_needed: needed,
        venues_missing: missing,
    }
}

/// Dated records first in timestamp order; undated ones after, by opponent.
/// Opponent name also breaks timestamp ties, keeping reruns stable.
fn sort_key(g: &GameRecord) -> (bool, Option<NaiveDateTime>, &str) {
    (g.date_timestamp.is_none(), g.date_timestamp, g.opponent_name.as_str())
}

/// Canonical serialization: pretty JSON plus trailing newline. Callers
/// byte-compare against the previously written file before rewriting.
pub fn to_canonical_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Venue assets follow the `<venue_slug>.jpg` convention.
pub fn asset_file_name(venue_slug: &str) -> String {
    join!(venue_slug, ".", ASSET_EXT)
}
