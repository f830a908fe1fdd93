// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;

pub mod dates;
pub mod finalize;
pub mod record;
pub mod scrape;
pub mod slug;
pub mod tv;

pub use config::aliases::AliasTable;
pub use finalize::{ScheduleBundle, finalize, to_canonical_json};
pub use record::{GameRecord, Marker, Site, Status};
pub use scrape::{ScrapeContext, parse_schedule};
pub use tv::TvNetwork;
