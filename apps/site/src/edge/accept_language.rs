use crate::i18n::Language;

/// Splits an `Accept-Language` value into lower-cased tags, in the order sent.
///
/// Weights (`;q=...`) are stripped and otherwise ignored. An empty or
/// whitespace-only value yields no tags. Malformed entries are kept as-is
/// (trimmed, lower-cased) rather than rejected.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    if header.trim().is_empty() {
        return Vec::new();
    }

    header
        .split(',')
        .map(|entry| {
            let tag = entry.split(';').next().unwrap_or_default();
            tag.trim().to_lowercase()
        })
        .collect()
}

/// Picks the site language from an optional `Accept-Language` value.
///
/// Only the first tag counts. It selects English when it starts with `en`
/// (plain prefix match, so `en-GB` and `eng` both qualify); anything else,
/// including no header at all, selects French.
pub fn preferred_language(header: Option<&str>) -> Language {
    let tags = header.map(parse_accept_language).unwrap_or_default();

    match tags.first() {
        Some(first) if first.starts_with("en") => Language::En,
        _ => Language::Fr,
    }
}
