// src/config/consts.rs

// Home program identity. Drives home/neutral site inference and keeps the
// program's own logo from being mistaken for an opponent's.
pub const HOME_PROGRAM: &str = "Nebraska";
pub const HOME_CITY: &str = "Lincoln";

// Venue assets are looked up as <venue_slug>.<ASSET_EXT>
pub const ASSET_EXT: &str = "jpg";

// Schedule card container classes, tried in order. Whole-token match:
// the first needle must not also swallow its own BEM sub-elements.
pub const CARD_CLASSES: &[&str] = &[
    "schedule-event-item-default",
    "schedule-event-item",
    "schedule__list-item",
];
