// src/scrape/mod.rs
mod cards;
mod merge;
mod table;

pub use cards::GameCard;

use chrono::NaiveDate;

use crate::config::aliases::AliasTable;
use crate::record::GameRecord;

/// Per-invocation inputs, threaded explicitly instead of living in globals.
pub struct ScrapeContext<'a> {
    /// Anchor for the year-inference heuristic; callers pass the current date.
    pub today: NaiveDate,
    pub aliases: &'a AliasTable,
}

/// Base-record strategies, tried in order; first hit wins. The header-matched
/// table is the only shipped layout — a legacy extractor slots in behind it
/// without touching the rest of the pipeline.
type Strategy = fn(&str, &ScrapeContext<'_>) -> Option<Vec<GameRecord>>;
const STRATEGIES: &[Strategy] = &[table::extract];

/// Full pipeline over one page render: base extraction, card enrichment,
/// overlay. An empty result means no recognized layout (or a legitimately
/// bare schedule) — never an error, by design.
pub fn parse_schedule(doc: &str, ctx: &ScrapeContext) -> Vec<GameRecord> {
    let mut games = Vec::new();
    for strategy in STRATEGIES {
        if let Some(found) = strategy(doc, ctx) {
            games = found;
            break;
        }
    }
    if games.is_empty() {
        log::warn!("no games extracted: bare schedule or unrecognized layout");
        return games;
    }

    let cards = cards::extract(doc);
    log::debug!("schedule: {} base rows, {} enrichment cards", games.len(), cards.len());
    merge::overlay(&mut games, &cards, ctx.aliases);
    games
}
