// src/core/html.rs
//
// Minimal string-scanning helpers for loosely-structured markup.
// No DOM: everything works on byte offsets into the original document,
// case-insensitive, tolerant of unquoted/single-quoted attributes.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find `pat` in (lowercased) `lc` starting at `from`, rejecting hits where
/// the tag name continues ("<th" inside "<thead", "</div" inside "</divider").
fn find_at_boundary(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(pat) {
        let at = pos + rel;
        let after = at + pat.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_alphanumeric() || *b == b'-' => pos = after,
            _ => return Some(at),
        }
    }
    None
}

/// Next `<tag …>` opener at/after `from`. Returns (start, end past '>').
pub fn next_opener_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pat = join!("<", &to_lower(tag));
    let start = find_at_boundary(&lc, &pat, from)?;
    let end = s[start..].find('>')? + start + 1;
    Some((start, end))
}

/// Opener-to-close block for tags that do not legally nest (tr, td, th).
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let (o_s, o_e) = next_opener_ci(s, tag, from)?;
    let lc = to_lower(s);
    let close = join!("</", &to_lower(tag));
    let c = find_at_boundary(&lc, &close, o_e)?;
    let end = s[c..].find('>')? + c + 1;
    Some((o_s, end))
}

/// Opener-to-balanced-close block for nesting containers (table, div).
pub fn next_balanced_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let (o_s, _) = next_opener_ci(s, tag, from)?;
    let end = balanced_end_ci(s, tag, o_s)?;
    Some((o_s, end))
}

/// Byte offset just past the `</tag>` balancing the opener at `open_start`.
/// Counts nested same-tag openers; `None` if the document never closes it.
pub fn balanced_end_ci(s: &str, tag: &str, open_start: usize) -> Option<usize> {
    let lc = to_lower(s);
    let tag = to_lower(tag);
    let open = join!("<", &tag);
    let close = join!("</", &tag);

    let mut depth = 0usize;
    let mut pos = open_start;
    loop {
        let next_open = find_at_boundary(&lc, &open, pos);
        let next_close = find_at_boundary(&lc, &close, pos);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = o + open.len();
            }
            (_, Some(c)) => {
                depth = depth.saturating_sub(1);
                let end = s[c..].find('>')? + c + 1;
                if depth == 0 {
                    return Some(end);
                }
                pos = end;
            }
            _ => return None,
        }
    }
}

/// Attribute value from a tag opener. Quote-tolerant: double, single, none.
pub fn attr_in_opener(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let pat = join!(&to_lower(name), "=");
    let mut search = 0usize;
    while let Some(rel) = lc.get(search..)?.find(&pat) {
        let at = search + rel;
        // must be a whole attribute name, not the tail of another ("data-src" vs "src")
        if at == 0 || !lc.as_bytes()[at - 1].is_ascii_whitespace() {
            search = at + pat.len();
            continue;
        }
        let val = &opener[at + pat.len()..];
        let (quote, off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[off..].find(q).map(|e| off + e).unwrap_or(val.len()),
            None => val[off..]
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .map(|e| off + e)
                .unwrap_or(val.len()),
        };
        let out = val[off..end].trim();
        return if out.is_empty() { None } else { Some(s!(out)) };
    }
    None
}

fn opener_class(opener: &str) -> Option<String> {
    attr_in_opener(opener, "class").map(|c| to_lower(&c))
}

/// Next tag opener of any name. Returns (start, end past '>', lowercase name).
fn next_any_opener(s: &str, from: usize) -> Option<(usize, usize, String)> {
    let bytes = s.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'-') {
                j += 1;
            }
            let name = s[i + 1..j].to_ascii_lowercase();
            let end = s[i..].find('>').map(|e| i + e + 1)?;
            return Some((i, end, name));
        }
        i += 1;
    }
    None
}

fn is_void_tag(name: &str) -> bool {
    matches!(name, "img" | "br" | "hr" | "input" | "meta" | "link" | "source" | "wbr")
}

fn next_by_class_ci(
    s: &str,
    from: usize,
    class_matches: impl Fn(&str) -> bool,
) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some((t_s, t_e, name)) = next_any_opener(s, pos) {
        pos = t_e;
        let Some(class) = opener_class(&s[t_s..t_e]) else { continue };
        if !class_matches(&class) {
            continue;
        }
        if is_void_tag(&name) {
            return Some((t_s, t_e));
        }
        let end = balanced_end_ci(s, &name, t_s).unwrap_or(t_e);
        return Some((t_s, end));
    }
    None
}

/// Block of the first element (any tag) whose class attribute contains
/// `needle` as a substring. BEM suffixes match this way
/// ("opponent-name" hits "schedule-event-item-default__opponent-name").
pub fn next_by_class_contains_ci(s: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let n = to_lower(needle);
    next_by_class_ci(s, from, |class| class.contains(&n))
}

/// Block of the first element carrying `needle` as a whole class token.
pub fn next_by_class_token_ci(s: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let n = to_lower(needle);
    next_by_class_ci(s, from, |class| {
        class.split_ascii_whitespace().any(|t| t == n)
    })
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Text nodes of a fragment: tags dropped, entities resolved, each node
/// end-trimmed, nodes joined on single spaces. Whitespace *inside* a node
/// survives, so multi-space and line-break separators stay splittable.
pub fn node_text_joined(s: &str) -> String {
    fn flush(parts: &mut Vec<String>, node: &mut String) {
        let t = normalize_entities(node).trim().to_string();
        if !t.is_empty() {
            parts.push(t);
        }
        node.clear();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut node = String::new();
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => {
                in_tag = true;
                flush(&mut parts, &mut node);
            }
            '>' => in_tag = false,
            _ if !in_tag => node.push(ch),
            _ => {}
        }
    }
    flush(&mut parts, &mut node);
    parts.join(" ")
}

/// Raw text content of an element block (whitespace structure kept).
pub fn inner_raw_text(block: &str) -> String {
    node_text_joined(&inner_after_open_tag(block))
}

/// Collapsed text content of an element block.
pub fn inner_text(block: &str) -> String {
    normalize_ws(&inner_raw_text(block))
}
