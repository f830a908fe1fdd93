// src/scrape/table.rs
//
// Primary layout: one table whose header names both a date and a location
// column. Each data row carries date / matchup / location / time-or-result
// in its first four cells.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::HOME_CITY;
use crate::core::html::{inner_raw_text, inner_text, next_balanced_ci, next_element_ci, to_lower};
use crate::core::sanitize::normalize_ws;
use crate::dates;
use crate::record::{GameRecord, Marker, Site, Status};
use crate::slug::{slugify, venue_slug};
use crate::tv;

use super::ScrapeContext;

/// Locate the schedule table and turn its rows into base records.
/// `None` when no table header matches — the strategy cascade moves on.
pub fn extract(doc: &str, ctx: &ScrapeContext) -> Option<Vec<GameRecord>> {
    let table = find_schedule_table(doc)?;

    let mut games = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_element_ci(table, "tr", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let mut cells: Vec<String> = Vec::with_capacity(4);
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_element_ci(tr, "td", td_pos) {
            cells.push(inner_raw_text(&tr[td_s..td_e]));
            td_pos = td_e;
        }
        if cells.len() < 4 {
            continue; // header, spacer or malformed row
        }
        if looks_like_header(&cells) {
            continue; // some layouts mark the header row with plain <td>
        }

        if let Some(g) = row_to_record(&cells, &inner_text(tr), ctx) {
            games.push(g);
        }
    }
    Some(games)
}

fn row_to_record(cells: &[String], row_text: &str, ctx: &ScrapeContext) -> Option<GameRecord> {
    let (marker, opponent) = split_matchup(&cells[1]);
    if opponent.is_empty() {
        return None; // non-event row
    }

    let (city, venue) = split_location(&cells[2]);
    let when = dates::normalize(Some(cells[0].as_str()), Some(cells[3].as_str()), ctx.today);
    let site = site_for(marker, city.as_deref());

    Some(GameRecord {
        date_timestamp: when.timestamp,
        weekday: when.weekday,
        date_display: when.date_display,
        time_local: when.time_local,
        is_time_tba: when.is_tba,
        site,
        matchup_marker: marker,
        opponent_slug: slugify(&opponent),
        opponent_name: opponent,
        opponent_logo_url: None,
        venue_slug: venue_slug(venue.as_deref(), city.as_deref(), ctx.aliases),
        location_city: city,
        location_venue: venue,
        tv_network: tv::sniff(row_text),
        status: Status::Scheduled,
    })
}

/* ---------------- table location ---------------- */

fn find_schedule_table(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_balanced_ci(doc, "table", pos) {
        let table = &doc[tb_s..tb_e];
        pos = tb_e;
        if header_matches(table) {
            log::debug!("schedule table located at byte {}", tb_s);
            return Some(table);
        }
    }
    None
}

/// The header row must name both a date-like and a location-like column.
fn header_matches(table: &str) -> bool {
    let mut labels: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_element_ci(table, "th", pos) {
        labels.push(to_lower(&inner_text(&table[th_s..th_e])));
        pos = th_e;
    }
    if labels.is_empty() {
        // th-less layout: read the first row's plain cells instead
        if let Some((tr_s, tr_e)) = next_element_ci(table, "tr", 0) {
            let tr = &table[tr_s..tr_e];
            let mut td_pos = 0usize;
            while let Some((td_s, td_e)) = next_element_ci(tr, "td", td_pos) {
                labels.push(to_lower(&inner_text(&tr[td_s..td_e])));
                td_pos = td_e;
            }
        }
    }
    labels.iter().any(|l| l.contains("date")) && labels.iter().any(|l| l.contains("location"))
}

fn looks_like_header(cells: &[String]) -> bool {
    to_lower(&cells[0]).contains("date") || to_lower(&cells[1]).contains("opponent")
}

/* ---------------- cell parsing ---------------- */

/// "vs.\nColorado" → (Vs, "Colorado"); "at Colorado State" → (At, …).
/// No recognizable marker defaults to "vs." with the whole text as opponent.
pub(super) fn split_matchup(text: &str) -> (Marker, String) {
    let t = text.trim();
    let lc = to_lower(t);
    for (prefix, marker) in [("vs.", Marker::Vs), ("vs", Marker::Vs), ("at", Marker::At)] {
        if let Some(rest) = lc.strip_prefix(prefix) {
            // marker must stand alone ("at" is not the start of "Atlanta")
            if rest.starts_with(|c: char| c.is_whitespace()) {
                return (marker, normalize_ws(&t[prefix.len()..]));
            }
        }
    }
    (Marker::Vs, normalize_ws(t))
}

static LOC_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}|\|").unwrap());

/// "Lincoln, Neb. / Memorial Stadium" → (city, venue). Without the " / "
/// separator, wide gaps or pipes split instead: first part is the city,
/// last the venue; a single part is city-only.
pub(super) fn split_location(text: &str) -> (Option<String>, Option<String>) {
    let collapsed = normalize_ws(text);
    if collapsed.is_empty() {
        return (None, None);
    }
    if let Some((city, venue)) = collapsed.split_once(" / ") {
        return (non_empty(city), non_empty(venue));
    }

    let parts: Vec<String> = LOC_SEP
        .split(text)
        .map(normalize_ws)
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [] => (None, None),
        [city] => (Some(city.clone()), None),
        [city, .., venue] => (Some(city.clone()), Some(venue.clone())),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

fn site_for(marker: Marker, city: Option<&str>) -> Site {
    if marker == Marker::At {
        return Site::Away;
    }
    // a "vs." game away from the home city is a neutral-site game
    match city {
        Some(c) if to_lower(c).contains(&to_lower(HOME_CITY)) => Site::Home,
        _ => Site::Neutral,
    }
}
