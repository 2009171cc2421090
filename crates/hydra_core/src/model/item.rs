//! Gallery item domain model.
//!
//! # Responsibility
//! - Define the normalized record every query stage works on.
//! - Expose per-field values under one natural ordering.
//!
//! # Invariants
//! - `tags` are trimmed and lower-cased before an `Item` exists.
//! - `Item` never carries render-only state (visibility, position); that
//!   lives in `render::RenderTable`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Stable identifier of a gallery item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = String;

/// Field whose sort policy is case-insensitive lexicographic ascending.
pub const IDENTIFIER_FIELD: &str = "id";
/// Creation timestamp field name.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Last modification timestamp field name.
pub const MODIFIED_AT_FIELD: &str = "modified_at";
/// Tag list field name. Not sortable.
pub const TAGS_FIELD: &str = "tags";

/// Normalized gallery record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique within one item set.
    pub id: ItemId,
    /// Lower-cased, trimmed tag names.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Remaining payload fields, kept opaque but sortable.
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item and normalizes its tags.
    ///
    /// Blank tags are dropped; tag order is otherwise preserved.
    pub fn new(
        id: impl Into<ItemId>,
        tags: impl IntoIterator<Item = impl AsRef<str>>,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            tags: tags
                .into_iter()
                .filter_map(|tag| normalize_tag(tag.as_ref()))
                .collect(),
            created_at,
            modified_at,
            extra: Map::new(),
        }
    }

    /// Attaches one extra payload field.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Returns whether one of the tags equals `keyword` exactly.
    ///
    /// `keyword` must already be normalized.
    pub fn has_tag(&self, keyword: &str) -> bool {
        self.tags.iter().any(|tag| tag == keyword)
    }

    /// Looks up a field value by name.
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            IDENTIFIER_FIELD => FieldValue::Text(self.id.as_str()),
            CREATED_AT_FIELD => FieldValue::Date(self.created_at),
            MODIFIED_AT_FIELD => FieldValue::Date(self.modified_at),
            TAGS_FIELD => FieldValue::Missing,
            other => self
                .extra
                .get(other)
                .map(FieldValue::from_json)
                .unwrap_or(FieldValue::Missing),
        }
    }
}

/// Borrowed view of one sortable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Absent, `null`, or a compound JSON value.
    Missing,
    Bool(bool),
    Number(f64),
    Text(&'a str),
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Maps a raw JSON value to its sortable form.
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text.as_str()),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Missing,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Natural ordering: same-kind values compare by value, mixed kinds by
    /// `Missing < Bool < Number < Text < Date`.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Number(left), Self::Number(right)) => left.total_cmp(right),
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Date(left), Self::Date(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::Date(_) => 4,
        }
    }
}

/// Normalizes one tag or keyword: trimmed and lower-cased, `None` if blank.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
