//! Startup keywords from a `?keywords=a&keywords=b` query string.
//!
//! # Invariants
//! - Only `keywords` parameters are collected (key match is case-insensitive).
//! - Values are percent-decoded; malformed escapes are kept literally.
//! - Output keeps parameter order and is not normalized (the query state
//!   normalizes on construction).

use log::debug;
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;

const KEYWORDS_PARAM: &str = "keywords";

static PERCENT_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%([0-9A-Fa-f]{2})").expect("valid percent escape regex"));

/// Extracts `keywords` values from a URI query string.
///
/// Accepts the string with or without its leading `?`. An empty query yields
/// an empty list.
pub fn parse_uri_keywords(query: &str) -> Vec<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut keywords = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            debug!("event=uri_parse module=uri status=skipped reason=missing_value");
            continue;
        };
        if !key.eq_ignore_ascii_case(KEYWORDS_PARAM) {
            debug!("event=uri_parse module=uri status=skipped reason=unknown_key");
            continue;
        }
        keywords.push(percent_decode(value));
    }
    keywords
}

/// Decodes `%XX` escapes as UTF-8; invalid UTF-8 becomes U+FFFD.
pub fn percent_decode(value: &str) -> String {
    let decoded: Cow<'_, [u8]> =
        PERCENT_ESCAPE_RE.replace_all(value.as_bytes(), |caps: &Captures<'_>| {
            let hex = std::str::from_utf8(&caps[1]).unwrap_or_default();
            u8::from_str_radix(hex, 16)
                .map(|byte| vec![byte])
                .unwrap_or_else(|_| caps[0].to_vec())
        });
    String::from_utf8_lossy(&decoded).into_owned()
}
