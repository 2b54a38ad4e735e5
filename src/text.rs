//! Small text helpers shared by the extractors and the normalizer.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::consts::BASE_URL;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static UINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d.]+").expect("valid regex"));
/// Second-resolution image candidate in a `srcset` attribute.
static SRCSET_2X: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\s,]+)\s+2x").expect("valid regex"));

static BASE: Lazy<Url> = Lazy::new(|| Url::parse(BASE_URL).expect("valid base url"));

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_ws(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// First integer run in `s`, commas stripped beforehand so "1,000" reads as
/// 1000 rather than 1.
pub fn first_uint(s: &str) -> Option<u32> {
    let cleaned = s.replace(',', "");
    UINT.find(&cleaned)?.as_str().parse().ok()
}

/// First decimal run in `s` ("3.2 kg" -> 3.2). Degenerate runs like "." fail
/// to parse and yield `None`.
pub fn first_decimal(s: &str) -> Option<f64> {
    DECIMAL.find(s)?.as_str().parse().ok()
}

/// Prefer the 2x srcset candidate over the plain `src`.
pub fn srcset_2x(srcset: &str) -> Option<&str> {
    SRCSET_2X.captures(srcset).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Resolve an href against the wiki origin. Already-absolute URLs pass
/// through; unresolvable ones are returned verbatim.
pub fn absolute(href: &str) -> String {
    BASE.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Last path segment of a URL, query string stripped.
pub fn file_name(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .to_string()
}

/// Lowercase and replace non-alphanumeric runs with a single underscore,
/// trimming underscores at the edges.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
