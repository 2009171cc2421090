//! Catalog wire shape and load-time normalization.
//!
//! # Invariants
//! - Every normalized item has an id, both timestamps and lower-cased tags.
//! - A sample without `tags` is kept with an empty tag list.
//! - Sample ids are unique after normalization.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::model::item::{normalize_tag, Item, CREATED_AT_FIELD, MODIFIED_AT_FIELD};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPayload {
    /// Display-only timestamp of the last catalog refresh.
    #[serde(default)]
    pub last_updated: Option<String>,
    pub samples: Vec<RawItem>,
}

/// One sample record as sent on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub modified_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawItem {
    /// Normalizes one sample. `index` is only used for error reporting.
    pub fn normalize(self, index: usize) -> CatalogResult<Item> {
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(CatalogError::InvalidItem {
                    index,
                    message: "missing `id`".to_string(),
                })
            }
        };

        let created_at = parse_date_field(index, CREATED_AT_FIELD, self.created_at.as_ref())?;
        let modified_at = parse_date_field(index, MODIFIED_AT_FIELD, self.modified_at.as_ref())?;

        let tags = match self.tags {
            Some(tags) => tags
                .iter()
                .filter_map(|tag| normalize_tag(tag))
                .collect::<Vec<_>>(),
            None => {
                warn!(
                    "event=catalog_normalize module=catalog status=warn reason=missing_tags index={index}"
                );
                Vec::new()
            }
        };

        Ok(Item {
            id,
            tags,
            created_at,
            modified_at,
            extra: self.extra,
        })
    }
}

/// Normalizes every sample in payload order and rejects duplicate ids.
pub fn normalize_samples(samples: Vec<RawItem>) -> CatalogResult<Vec<Item>> {
    let mut seen = HashSet::with_capacity(samples.len());
    let mut items = Vec::with_capacity(samples.len());
    for (index, raw) in samples.into_iter().enumerate() {
        let item = raw.normalize(index)?;
        if !seen.insert(item.id.clone()) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        items.push(item);
    }
    Ok(items)
}

/// Parses a catalog timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD`; naive values are read as UTC.
pub fn parse_catalog_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn parse_date_field(
    index: usize,
    field: &str,
    value: Option<&Value>,
) -> CatalogResult<DateTime<Utc>> {
    let parsed = match value {
        Some(Value::String(text)) => parse_catalog_date(text),
        // Epoch milliseconds.
        Some(Value::Number(number)) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        Some(_) | None => None,
    };

    parsed.ok_or_else(|| CatalogError::InvalidItem {
        index,
        message: match value {
            None | Some(Value::Null) => format!("missing `{field}`"),
            Some(other) => format!("unparsable `{field}` value `{other}`"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{normalize_samples, parse_catalog_date, RawItem};
    use crate::catalog::error::CatalogError;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawItem {
        serde_json::from_value(value).expect("raw item fixture should decode")
    }

    #[test]
    fn parse_catalog_date_accepts_supported_shapes() {
        let rfc = parse_catalog_date("2015-11-18T10:15:00+01:00").expect("rfc3339");
        assert_eq!(rfc.hour(), 9);

        let spaced = parse_catalog_date(" 2015-11-18 10:15:00 ").expect("spaced");
        assert_eq!(spaced.minute(), 15);

        let date_only = parse_catalog_date("2016-02-29").expect("date only");
        assert_eq!(date_only.day(), 29);

        assert!(parse_catalog_date("18/11/2015").is_none());
    }

    #[test]
    fn normalize_lowercases_tags_and_keeps_extra_fields() {
        let item = raw(json!({
            "id": "Sun_Path",
            "tags": ["Ladybug", " Solar "],
            "created_at": "2015-11-18 10:00:00",
            "modified_at": 1_450_000_000_000_i64,
            "thumbnail": "thumbnail.png"
        }))
        .normalize(0)
        .expect("sample should normalize");

        assert_eq!(item.tags, vec!["ladybug", "solar"]);
        assert_eq!(item.extra.get("thumbnail"), Some(&json!("thumbnail.png")));
        assert!(!item.extra.contains_key("tags"));
        assert_eq!(item.modified_at.timestamp_millis(), 1_450_000_000_000);
    }

    #[test]
    fn normalize_treats_missing_tags_as_empty() {
        let item = raw(json!({
            "id": "untagged",
            "created_at": "2015-11-18",
            "modified_at": "2015-11-18"
        }))
        .normalize(3)
        .expect("missing tags should not fail");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn normalize_rejects_missing_id_and_bad_dates() {
        let missing_id = raw(json!({ "created_at": "2015-11-18", "modified_at": "2015-11-18" }))
            .normalize(1)
            .unwrap_err();
        assert!(matches!(missing_id, CatalogError::InvalidItem { index: 1, .. }));

        let bad_date = raw(json!({
            "id": "x",
            "created_at": "yesterday",
            "modified_at": "2015-11-18"
        }))
        .normalize(2)
        .unwrap_err();
        assert!(bad_date.to_string().contains("created_at"));
    }

    #[test]
    fn normalize_samples_rejects_duplicate_ids() {
        let sample = json!({ "id": "dup", "created_at": "2015-11-18", "modified_at": "2015-11-18" });
        let err = normalize_samples(vec![raw(sample.clone()), raw(sample)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "dup"));
    }
}
