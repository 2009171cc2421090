//! Core gallery logic for Hydra.
//! This crate owns the filter/sort/paginate pipeline and the seams to its
//! load, input and render collaborators.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod service;
pub mod uri;

pub use catalog::{
    load_catalog, parse_catalog, Catalog, CatalogError, CatalogResult, CatalogSource,
    FileCatalogSource, StaticCatalogSource,
};
pub use config::{ConfigError, GalleryConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::item::{FieldValue, Item, ItemId, IDENTIFIER_FIELD};
pub use model::item_set::ItemSet;
pub use query::filter::{filter_items, parse_keywords};
pub use query::input::{read_query_state, QueryInput};
pub use query::paginate::{paginate, PageOutcome};
pub use query::sort::{compare_items, sort_items, SortPolicy};
pub use query::state::{PageCursor, QueryState};
pub use render::{render_outcome, RenderTable, Renderer, TextRenderer};
pub use service::gallery_session::GallerySession;
pub use service::query_engine::{QueryEngine, QueryOutcome, ResultPage};
pub use uri::parse_uri_keywords;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
