// src/scrape/cards.rs
//
// Secondary layout: one card widget per game, used purely for enrichment —
// cards refine records, they never create them. Every field is optional and
// extraction of one never blocks another.

use crate::config::consts::{CARD_CLASSES, HOME_PROGRAM};
use crate::core::html::{
    attr_in_opener, inner_raw_text, inner_text, next_by_class_contains_ci, next_by_class_token_ci,
    next_opener_ci, to_lower,
};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::record::Marker;
use crate::slug::slugify;

use super::table::split_location;

/// Enrichment pulled from one schedule card.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameCard {
    pub opponent_name: Option<String>,
    pub matchup_marker: Option<Marker>,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub logo_url: Option<String>,
    pub broadcaster_alt: Option<String>,
}

/// All enrichment cards on the page. Container classes are tried in order;
/// the first class producing any cards wins.
pub fn extract(doc: &str) -> Vec<GameCard> {
    for class in CARD_CLASSES {
        let blocks = card_blocks(doc, class);
        if !blocks.is_empty() {
            return blocks.iter().map(|b| parse_card(b)).collect();
        }
    }
    Vec::new()
}

fn card_blocks<'a>(doc: &'a str, class: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_by_class_token_ci(doc, class, pos) {
        out.push(&doc[b_s..b_e]);
        pos = b_e;
    }
    out
}

fn parse_card(card: &str) -> GameCard {
    let opponent_name = text_by_class_contains(card, "opponent-name")
        .or_else(|| text_by_class_token(card, "opponent"))
        .or_else(|| text_by_class_token(card, "team"));

    let matchup_marker = text_by_class_contains(card, "divider").map(|t| {
        if t.trim().eq_ignore_ascii_case("at") { Marker::At } else { Marker::Vs }
    });

    let (city, venue) = match block_by_class_contains(card, "location") {
        Some(b) => split_location(&inner_raw_text(b)),
        None => (None, None),
    };

    let logo_url = images_block_logo(card)
        .or_else(|| opponent_name.as_deref().and_then(|opp| alt_matched_logo(card, opp)));

    // broadcaster badge lives in the card's own bottom link list; scoping the
    // search to this card block keeps a neighbor's badge out
    let broadcaster_alt = block_by_class_contains(card, "link-list")
        .and_then(|b| img_openers(b).into_iter().find_map(|op| attr_in_opener(op, "alt")))
        .map(|alt| normalize_ws(&normalize_entities(&alt)))
        .filter(|alt| !alt.is_empty());

    GameCard {
        opponent_name,
        matchup_marker,
        city,
        venue,
        logo_url,
        broadcaster_alt,
    }
}

/* ---------------- logo resolution ---------------- */

/// Images wrapper order is [home-program logo, opponent logo]; take the last.
fn images_block_logo(card: &str) -> Option<String> {
    let block = block_by_class_contains(card, "images")?;
    img_openers(block).last().and_then(|op| img_url(op))
}

/// Fallback: any image whose alt text loosely matches the opponent —
/// equal slugs, or substring containment either direction. The home
/// program's own mark is never a candidate.
fn alt_matched_logo(card: &str, opponent: &str) -> Option<String> {
    let opp_slug = slugify(opponent);
    let home = to_lower(HOME_PROGRAM);
    for opener in img_openers(card) {
        let Some(alt) = attr_in_opener(opener, "alt") else { continue };
        let alt = normalize_ws(&normalize_entities(&alt));
        if alt.is_empty() || to_lower(&alt).contains(&home) {
            continue;
        }
        let alt_slug = slugify(&alt);
        if alt_slug.is_empty() {
            continue;
        }
        let hit = alt_slug == opp_slug
            || (!opp_slug.is_empty()
                && (alt_slug.contains(&opp_slug) || opp_slug.contains(&alt_slug)));
        if hit {
            if let Some(url) = img_url(opener) {
                return Some(url);
            }
        }
    }
    None
}

/// Fixed attribute preference: lazy-load source, lazy-load source-set,
/// standard source-set, plain source. Inline data placeholders are skipped
/// at every step — a logo URL is never fabricated.
fn img_url(opener: &str) -> Option<String> {
    let mut candidates: Vec<String> = Vec::new();
    if let Some(u) = attr_in_opener(opener, "data-src") {
        candidates.push(u);
    }
    if let Some(set) = attr_in_opener(opener, "data-srcset") {
        candidates.extend(first_from_srcset(&set));
    }
    if let Some(set) = attr_in_opener(opener, "srcset") {
        candidates.extend(first_from_srcset(&set));
    }
    if let Some(u) = attr_in_opener(opener, "src") {
        candidates.push(u);
    }
    candidates
        .into_iter()
        .map(|u| normalize_entities(&u))
        .find(|u| !is_placeholder(u))
}

/// "url 1x, url2 2x" → first URL token.
fn first_from_srcset(set: &str) -> Option<String> {
    let url = set.split(',').next()?.trim().split_whitespace().next()?;
    if url.is_empty() { None } else { Some(s!(url)) }
}

fn is_placeholder(url: &str) -> bool {
    url.is_empty() || url.starts_with("data:image")
}

/* ---------------- element helpers ---------------- */

fn block_by_class_contains<'a>(card: &'a str, needle: &str) -> Option<&'a str> {
    next_by_class_contains_ci(card, needle, 0).map(|(s_, e_)| &card[s_..e_])
}

fn text_by_class_contains(card: &str, needle: &str) -> Option<String> {
    let t = inner_text(block_by_class_contains(card, needle)?);
    if t.is_empty() { None } else { Some(t) }
}

fn text_by_class_token(card: &str, needle: &str) -> Option<String> {
    let (s_, e_) = next_by_class_token_ci(card, needle, 0)?;
    let t = inner_text(&card[s_..e_]);
    if t.is_empty() { None } else { Some(t) }
}

fn img_openers(block: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s_, e_)) = next_opener_ci(block, "img", pos) {
        out.push(&block[s_..e_]);
        pos = e_;
    }
    out
}
