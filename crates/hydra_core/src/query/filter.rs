//! Keyword filter over gallery items.
//!
//! # Invariants
//! - No usable keyword means "match everything", never "match nothing".
//! - Matching is OR across keywords and whole-tag equality per tag.
//! - Output preserves input order.

use crate::model::item::{normalize_tag, Item};

/// Splits comma-separated user input into normalized keywords.
///
/// Blank entries are dropped, so `" , "` yields an empty list.
pub fn parse_keywords(input: &str) -> Vec<String> {
    normalize_keywords(input.split(','))
}

/// Trims, lower-cases and drops blank keywords, keeping order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .filter_map(|keyword| normalize_tag(keyword.as_ref()))
        .collect()
}

/// Keeps the items whose tags contain at least one keyword.
///
/// `keywords` may be raw user input; each is trimmed and lower-cased here.
/// Item tags are expected to be normalized at load time.
pub fn filter_items<'a, I, S>(items: I, keywords: &[S]) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
    S: AsRef<str>,
{
    let keywords = normalize_keywords(keywords);
    if keywords.is_empty() {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| keywords.iter().any(|keyword| item.has_tag(keyword)))
        .collect()
}
