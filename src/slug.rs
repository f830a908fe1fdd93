// src/slug.rs
//
// Deterministic identifiers for asset lookup. Everything here is a pure
// function of its inputs; downstream persistence relies on that.

use crate::config::aliases::AliasTable;

/// Lowercase, every run outside [a-z0-9] becomes one hyphen, ends trimmed.
/// Total and idempotent; empty in, empty out.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for ch in s.chars() {
        let c = ch.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            out.push('-');
            prev_hyphen = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Asset-lookup key for a venue.
///
/// An exact alias hit on the raw venue label wins outright. Otherwise the
/// venue slug gets the city appended as a disambiguating tag, unless the
/// base already implies the city ("memorial-stadium" + "Lincoln, Neb." →
/// "memorial-stadium-lincoln", but "lincoln-financial-field" + "Lincoln"
/// stays bare). State suffixes after the first comma never reach the tag.
pub fn venue_slug(venue: Option<&str>, city: Option<&str>, aliases: &AliasTable) -> String {
    if let Some(v) = venue {
        if let Some(hit) = aliases.lookup(v) {
            return s!(hit);
        }
    }

    let city_tag = city.map(|c| slugify(city_without_state(c))).unwrap_or_default();

    let base = venue
        .filter(|v| !v.trim().is_empty())
        .or_else(|| city.filter(|c| !c.trim().is_empty()))
        .unwrap_or("stadium");
    let base_slug = slugify(base);
    if base_slug.is_empty() {
        return if city_tag.is_empty() { s!("stadium") } else { city_tag };
    }

    if !city_tag.is_empty() && !base_slug.contains(&city_tag) {
        join!(base_slug, "-", &city_tag)
    } else {
        base_slug
    }
}

/// "Lincoln, Neb." → "Lincoln"
fn city_without_state(city: &str) -> &str {
    city.split(',').next().unwrap_or(city).trim()
}
