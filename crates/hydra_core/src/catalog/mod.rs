//! Catalog loading: the single asynchronous boundary of the gallery.
//!
//! # Responsibility
//! - Fetch the `{ last_updated, samples }` payload through a `CatalogSource`.
//! - Normalize samples (date parsing, tag lower-casing) into an `ItemSet`.
//!
//! # Invariants
//! - A `Catalog` only exists once every sample is fully normalized; query
//!   code never sees a partially loaded item set.
//! - `last_updated` is opaque display data and never influences queries.

mod error;
mod payload;
mod source;

pub use error::{CatalogError, CatalogResult};
pub use payload::{normalize_samples, parse_catalog_date, CatalogPayload, RawItem};
pub use source::{CatalogSource, FileCatalogSource, StaticCatalogSource};

use crate::model::item_set::ItemSet;
use chrono::{DateTime, Utc};
use log::{error, info};
use std::time::Instant;

/// Loaded, normalized catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Raw `last_updated` value from the payload.
    pub last_updated: Option<String>,
    pub items: ItemSet,
}

impl Catalog {
    /// Parses `last_updated` for display, when it is a known date shape.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.as_deref().and_then(parse_catalog_date)
    }
}

/// Decodes and normalizes a raw JSON payload.
pub fn parse_catalog(body: &str) -> CatalogResult<Catalog> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    let items = normalize_samples(payload.samples)?;
    Ok(Catalog {
        last_updated: payload.last_updated,
        items: ItemSet::new(items),
    })
}

/// Fetches and normalizes a catalog from `source`.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration, status and item count.
pub fn load_catalog(source: &dyn CatalogSource) -> CatalogResult<Catalog> {
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=catalog status=start source={}",
        source.kind()
    );

    let result = source.fetch().and_then(|body| parse_catalog(&body));
    match &result {
        Ok(catalog) => info!(
            "event=catalog_load module=catalog status=ok source={} duration_ms={} items={}",
            source.kind(),
            started_at.elapsed().as_millis(),
            catalog.items.len()
        ),
        Err(err) => error!(
            "event=catalog_load module=catalog status=error source={} duration_ms={} error={}",
            source.kind(),
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}
