// src/dates.rs
//
// Schedule pages publish partial dates ("Sat Aug 30") and loose times
// ("2:30 PM MDT", "TBA", sometimes a final score). Normalize both into a
// sortable timestamp plus display fields, degrading piecewise: whatever
// resolves is kept, whatever doesn't is left out, nothing ever errors.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::core::sanitize::normalize_ws;

/// Undated and time-to-be-announced records still need a slot in the day's
/// sort order; noon keeps them between morning and evening kickoffs.
const TBA_PLACEHOLDER_HOUR: u32 = 12;

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})\b")
        .unwrap()
});

static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2}):(\d{2})\s*([ap])\.?m\.?(\s+(?-i:[A-Z]{1,3}T)\b)?").unwrap()
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Normalized date/time bundle for one schedule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTime {
    pub timestamp: Option<NaiveDateTime>,
    pub weekday: Option<String>,
    pub date_display: Option<String>,
    pub time_local: String,
    pub is_tba: bool,
}

/// `today` anchors the year-inference heuristic; callers pass the current
/// date, tests pin one.
pub fn normalize(date_text: Option<&str>, time_text: Option<&str>, today: NaiveDate) -> GameTime {
    let date_display = date_text.map(normalize_ws).filter(|t| !t.is_empty());

    let date = date_display.as_deref().and_then(|t| resolve_date(t, today));
    let weekday = date.map(|d| d.format("%A").to_string().to_uppercase());

    let clock = time_text.and_then(find_clock);
    let (time_local, timestamp) = match (&clock, date) {
        (Some((disp, h, m)), Some(d)) => (disp.clone(), d.and_hms_opt(*h, *m, 0)),
        (Some((disp, _, _)), None) => (disp.clone(), None),
        (None, Some(d)) => (s!("TBA"), d.and_hms_opt(TBA_PLACEHOLDER_HOUR, 0, 0)),
        (None, None) => (s!("TBA"), None),
    };

    GameTime {
        timestamp,
        weekday,
        date_display,
        is_tba: clock.is_none(),
        time_local,
    }
}

/// Month name + day number anywhere in `text`, year inferred.
///
/// Year heuristic (annual publication cadence): a month more than one
/// calendar month behind today's belongs to next year. Known to be
/// ambiguous for postseason dates near the year boundary; kept as-is.
fn resolve_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = MONTH_DAY.captures(text)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;

    let mut year = today.year();
    if (month as i32) < today.month() as i32 - 1 {
        year += 1;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(abbr: &str) -> Option<u32> {
    let lc = abbr.to_ascii_lowercase();
    MONTHS.iter().position(|m| *m == lc).map(|i| i as u32 + 1)
}

/// Clock-time substring → (display form, hour24, minute). The display form
/// is the matched text upper-cased and period-stripped, trailing timezone
/// token kept ("2:30 p.m. MDT" → "2:30 PM MDT"). Result text and other
/// non-clock content yield `None`.
fn find_clock(text: &str) -> Option<(String, u32, u32)> {
    let caps = CLOCK.captures(text)?;
    let display = normalize_ws(&caps[0].to_ascii_uppercase().replace('.', ""));
    let hour12: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if minute > 59 {
        return None;
    }
    let pm = caps[3].eq_ignore_ascii_case("p");
    let hour24 = hour12 % 12 + if pm { 12 } else { 0 };
    Some((display, hour24, minute))
}
