//! Query engine: the filter → sort → paginate pipeline.
//!
//! # Responsibility
//! - Compose the pure query stages over one loaded item set.
//! - Shape results into the outcome the render collaborator consumes.
//!
//! # Invariants
//! - `run` is a pure function of (item set, query state, page size).
//! - `QueryOutcome::Page` never holds an empty item list.

use crate::model::item::Item;
use crate::model::item_set::ItemSet;
use crate::query::filter::filter_items;
use crate::query::paginate::{paginate, PageOutcome};
use crate::query::sort::sort_items;
use crate::query::state::QueryState;
use log::debug;
use std::num::NonZeroUsize;

/// One rendered page: the growing prefix of the matched items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<'a> {
    /// Items to show, in sort order.
    pub items: Vec<&'a Item>,
    /// Whether a "load more" action can reveal further items.
    pub has_more: bool,
    /// Number of items matching the keywords.
    pub total_matches: usize,
    /// Page index this prefix was computed for.
    pub page: u32,
}

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    /// Nothing matched the keywords.
    NoResults,
    Page(ResultPage<'a>),
}

impl<'a> QueryOutcome<'a> {
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Visible items; empty for `NoResults`.
    pub fn items(&self) -> &[&'a Item] {
        match self {
            Self::NoResults => &[],
            Self::Page(page) => &page.items,
        }
    }

    pub fn has_more(&self) -> bool {
        match self {
            Self::NoResults => false,
            Self::Page(page) => page.has_more,
        }
    }
}

/// Query pipeline bound to one loaded item set.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    items: ItemSet,
    page_size: NonZeroUsize,
}

impl QueryEngine {
    /// Creates an engine over a fully loaded item set.
    pub fn new(items: ItemSet, page_size: NonZeroUsize) -> Self {
        Self { items, page_size }
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Filters by `keywords` and sorts by `sort_field`.
    pub fn select<S: AsRef<str>>(&self, keywords: &[S], sort_field: &str) -> Vec<&Item> {
        let filtered = filter_items(&self.items, keywords);
        sort_items(&filtered, sort_field)
    }

    /// Paginates an already selected sequence.
    pub fn page_of<'a>(&self, selected: &[&'a Item], page: u32) -> QueryOutcome<'a> {
        match paginate(selected, page, self.page_size) {
            PageOutcome::NoResults => QueryOutcome::NoResults,
            PageOutcome::Page { items, has_more } => QueryOutcome::Page(ResultPage {
                items: items.to_vec(),
                has_more,
                total_matches: selected.len(),
                page,
            }),
        }
    }

    /// Runs the full pipeline for `state`.
    ///
    /// An exhausted cursor yields `NoResults` without recomputing.
    pub fn run(&self, state: &QueryState) -> QueryOutcome<'_> {
        let Some(page) = state.cursor().page() else {
            return QueryOutcome::NoResults;
        };

        let selected = self.select(state.keywords(), state.sort_field());
        let outcome = self.page_of(&selected, page);
        debug!(
            "event=query_run module=engine status=ok {} page={} matches={} shown={}",
            state.log_fields(),
            page,
            selected.len(),
            outcome.items().len()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryEngine, QueryOutcome};
    use crate::model::item::Item;
    use crate::model::item_set::ItemSet;
    use crate::query::state::QueryState;
    use chrono::{TimeZone, Utc};
    use std::num::NonZeroUsize;

    fn engine() -> QueryEngine {
        let at = Utc.with_ymd_and_hms(2015, 11, 18, 0, 0, 0).unwrap();
        let items = vec![
            Item::new("b", ["x"], at, at),
            Item::new("a", ["y"], at, at),
            Item::new("c", ["x"], at, at),
        ];
        QueryEngine::new(ItemSet::new(items), NonZeroUsize::new(1).unwrap())
    }

    #[test]
    fn run_reports_totals_and_more_flag() {
        let engine = engine();
        let outcome = engine.run(&QueryState::from_input("x", "id"));
        let QueryOutcome::Page(page) = outcome else {
            panic!("expected a page");
        };
        assert_eq!(page.total_matches, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "b");
        assert!(page.has_more);
    }

    #[test]
    fn run_short_circuits_exhausted_cursor() {
        let engine = engine();
        let state = QueryState::from_input("", "id").exhausted();
        assert!(engine.run(&state).is_no_results());
        assert!(engine.run(&state).items().is_empty());
    }
}
