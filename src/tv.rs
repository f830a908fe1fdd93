// src/tv.rs
//
// Broadcaster labels arrive as free text ("Big Ten Network", "ESPN2", image
// alt strings). Normalize onto the fixed set of codes the downstream site
// knows how to badge; anything else stays None.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TvNetwork {
    Btn,
    Fox,
    Fs1,
    Fs2,
    Cbs,
    Nbc,
    Peacock,
    Abc,
    Espn,
    Espn2,
    Espnu,
}

const TV_LABELS: &[(&str, TvNetwork)] = &[
    ("big ten network", TvNetwork::Btn),
    ("btn", TvNetwork::Btn),
    ("fox", TvNetwork::Fox),
    ("fs1", TvNetwork::Fs1),
    ("fs2", TvNetwork::Fs2),
    ("cbs", TvNetwork::Cbs),
    ("nbc", TvNetwork::Nbc),
    ("peacock", TvNetwork::Peacock),
    ("abc", TvNetwork::Abc),
    ("espn", TvNetwork::Espn),
    ("espn2", TvNetwork::Espn2),
    ("espnu", TvNetwork::Espnu),
];

// "espn2"/"espnu" before "espn": word boundaries make the longer forms win.
static TV_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(big ten network|fox|fs1|fs2|btn|abc|cbs|nbc|peacock|espn2|espnu|espn)\b")
        .unwrap()
});

/// Exact-label normalization ("Big Ten Network" → Btn). Case and stray
/// punctuation are forgiven; unknown labels are not.
pub fn normalize(label: &str) -> Option<TvNetwork> {
    let key: String = label
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    let key = key.trim();
    TV_LABELS.iter().find(|(l, _)| *l == key).map(|(_, n)| *n)
}

/// First known network token anywhere in free text ("7:30 PM on ESPN2").
pub fn sniff(text: &str) -> Option<TvNetwork> {
    TV_TOKEN.find(text).and_then(|m| normalize(m.as_str()))
}
