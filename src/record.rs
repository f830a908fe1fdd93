// src/record.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::tv::TvNetwork;

/// Home/away/neutral framing of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Home,
    Away,
    Neutral,
}

/// Relational marker shown beside the opponent name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = "vs.")]
    Vs,
    #[serde(rename = "at")]
    At,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Vs => "vs.",
            Marker::At => "at",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Future states (postponed, final, …) are out of scope; the extractor only
/// ever emits scheduled games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Scheduled,
}

/// One normalized schedule entry. Field names are the wire names of the
/// serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date_timestamp: Option<NaiveDateTime>,
    pub weekday: Option<String>,
    pub date_display: Option<String>,
    pub time_local: String,
    pub is_time_tba: bool,
    pub site: Site,
    pub matchup_marker: Marker,
    pub opponent_name: String,
    pub opponent_slug: String,
    pub opponent_logo_url: Option<String>,
    pub location_city: Option<String>,
    pub location_venue: Option<String>,
    pub venue_slug: String,
    pub tv_network: Option<TvNetwork>,
    pub status: Status,
}
