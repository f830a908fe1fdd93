// src/config/aliases.rs
use std::{collections::HashMap, fs, io, path::Path};

/// Raw venue label → preferred venue slug.
///
/// Loaded once by the caller and threaded through the pipeline; the core
/// never mutates it. An exact-label hit short-circuits slug composition.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, raw_label: &str) -> Option<&str> {
        self.map.get(raw_label).map(String::as_str)
    }

    pub fn insert(&mut self, raw_label: &str, slug: &str) {
        self.map.insert(s!(raw_label), s!(slug));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// One `label,slug` pair per line. Blank lines, `#` comments and lines
    /// without a comma are skipped; only the first comma splits.
    pub fn parse_csv(text: &str) -> Self {
        let mut map = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((label, slug)) = line.split_once(',') else {
                continue;
            };
            let (label, slug) = (label.trim(), slug.trim());
            if !label.is_empty() && !slug.is_empty() {
                map.insert(s!(label), s!(slug));
            }
        }
        Self { map }
    }

    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::parse_csv(&fs::read_to_string(path)?))
    }
}
