// src/scrape/merge.rs
//
// Overlay card enrichment onto table-derived base records. Matching is
// loose on purpose: card names are display names ("Cincinnati Bearcats"),
// table names are short forms ("Cincinnati"). First match wins; there is
// no scoring among multiple candidates.

use crate::config::aliases::AliasTable;
use crate::core::html::to_lower;
use crate::record::GameRecord;
use crate::slug::{slugify, venue_slug};
use crate::tv;

use super::cards::GameCard;

pub fn overlay(games: &mut [GameRecord], cards: &[GameCard], aliases: &AliasTable) {
    for game in games.iter_mut() {
        let hit = cards.iter().find(|c| {
            c.opponent_name
                .as_deref()
                .is_some_and(|n| names_match(n, &game.opponent_name))
        });
        let Some(card) = hit else { continue };

        if let Some(name) = &card.opponent_name {
            game.opponent_name = name.clone();
            game.opponent_slug = slugify(name);
        }
        if let Some(marker) = card.matchup_marker {
            game.matchup_marker = marker;
        }

        // enrichment location is higher-fidelity: overwrite and recompute
        // the venue key through the alias table
        if card.city.is_some() || card.venue.is_some() {
            if let Some(city) = &card.city {
                game.location_city = Some(city.clone());
            }
            if let Some(venue) = &card.venue {
                game.location_venue = Some(venue.clone());
            }
            game.venue_slug = venue_slug(
                game.location_venue.as_deref(),
                game.location_city.as_deref(),
                aliases,
            );
        }

        if let Some(url) = &card.logo_url {
            game.opponent_logo_url = Some(url.clone());
        }
        if let Some(alt) = &card.broadcaster_alt {
            if let Some(network) = tv::normalize(alt).or_else(|| tv::sniff(alt)) {
                game.tv_network = Some(network);
            }
        }
    }
}

/// Case-insensitive substring containment, either direction.
fn names_match(a: &str, b: &str) -> bool {
    let (a, b) = (to_lower(a.trim()), to_lower(b.trim()));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}
