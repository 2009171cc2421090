//! Sort policies shared by data sorting and visual reordering.
//!
//! # Invariants
//! - The identifier field sorts case-insensitive lexicographic ascending;
//!   every other field sorts by natural value descending.
//! - Sorting is stable: equal keys keep their input order.
//! - `compare_items` is the only comparator; `render::RenderTable` sorts
//!   through it too, so both orderings agree for the same field and data.

use crate::model::item::{FieldValue, Item, IDENTIFIER_FIELD};
use std::cmp::Ordering;

/// Comparison policy selected by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Trimmed, case-insensitive text, ascending.
    LexicographicAscending,
    /// Natural value ordering, largest/newest first.
    NaturalDescending,
}

impl SortPolicy {
    /// Fixed binary dispatch on the identifier field name.
    pub fn for_field(field: &str) -> Self {
        if field == IDENTIFIER_FIELD {
            Self::LexicographicAscending
        } else {
            Self::NaturalDescending
        }
    }
}

/// Compares two items on `field` under the field's policy.
pub fn compare_items(field: &str, left: &Item, right: &Item) -> Ordering {
    let left_value = left.field(field);
    let right_value = right.field(field);
    match SortPolicy::for_field(field) {
        SortPolicy::LexicographicAscending => {
            lexicographic_key(&left_value).cmp(&lexicographic_key(&right_value))
        }
        SortPolicy::NaturalDescending => right_value.natural_cmp(&left_value),
    }
}

/// Returns a new sequence ordered by `field`; the input is left untouched.
pub fn sort_items<'a>(items: &[&'a Item], field: &str) -> Vec<&'a Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| compare_items(field, left, right));
    sorted
}

fn lexicographic_key(value: &FieldValue<'_>) -> Option<String> {
    value.as_text().map(|text| text.trim().to_lowercase())
}
