//! Gallery session: incremental paging over a cached selection.
//!
//! # Responsibility
//! - Re-filter and re-sort on every keyword or sort-field change.
//! - Reuse the filtered/sorted selection when the user loads more pages.
//! - Drive the page cursor state machine on the caller's `QueryState`.
//!
//! # Invariants
//! - Every outcome equals `QueryEngine::run` for the returned state.
//! - The cache is keyed by (keywords, sort field) and recomputed when stale.
//! - A `NoResults` outcome always comes with an `Exhausted` cursor.

use crate::model::item::Item;
use crate::query::state::{PageCursor, QueryState};
use crate::service::query_engine::{QueryEngine, QueryOutcome};
use log::{debug, info};

#[derive(Debug)]
struct Selection<'e> {
    keywords: Vec<String>,
    sort_field: String,
    items: Vec<&'e Item>,
}

impl<'e> Selection<'e> {
    fn compute(engine: &'e QueryEngine, state: &QueryState) -> Self {
        Self {
            keywords: state.keywords().to_vec(),
            sort_field: state.sort_field().to_string(),
            items: engine.select(state.keywords(), state.sort_field()),
        }
    }

    fn matches(&self, state: &QueryState) -> bool {
        self.keywords == state.keywords() && self.sort_field == state.sort_field()
    }
}

/// Session over one query engine.
#[derive(Debug)]
pub struct GallerySession<'e> {
    engine: &'e QueryEngine,
    cache: Option<Selection<'e>>,
}

impl<'e> GallerySession<'e> {
    pub fn new(engine: &'e QueryEngine) -> Self {
        Self {
            engine,
            cache: None,
        }
    }

    pub fn engine(&self) -> &'e QueryEngine {
        self.engine
    }

    /// Match count of the cached selection, if any query ran yet.
    pub fn cached_matches(&self) -> Option<usize> {
        self.cache.as_ref().map(|selection| selection.items.len())
    }

    /// Runs a fresh query: full re-filter and re-sort, cursor back to page 0.
    pub fn apply(&mut self, state: QueryState) -> (QueryState, QueryOutcome<'e>) {
        let state = state.restart();
        self.cache = Some(Selection::compute(self.engine, &state));
        let (state, outcome) = self.paginate_cached(state, 0);
        info!(
            "event=query_apply module=session status=ok {} matches={}",
            state.log_fields(),
            self.cached_matches().unwrap_or(0)
        );
        (state, outcome)
    }

    /// Reveals one more page of the current selection.
    ///
    /// An exhausted state stays exhausted and yields `NoResults`.
    pub fn load_more(&mut self, state: QueryState) -> (QueryState, QueryOutcome<'e>) {
        let state = state.next_page();
        let page = match state.cursor() {
            PageCursor::Idle(page) => page,
            PageCursor::Exhausted => {
                debug!("event=page_load module=session status=skipped reason=exhausted");
                return (state, QueryOutcome::NoResults);
            }
        };

        if self
            .cache
            .as_ref()
            .is_some_and(|selection| !selection.matches(&state))
        {
            self.cache = None;
        }

        let (state, outcome) = self.paginate_cached(state, page);
        debug!(
            "event=page_load module=session status=ok page={} shown={} has_more={}",
            page,
            outcome.items().len(),
            outcome.has_more()
        );
        (state, outcome)
    }

    fn paginate_cached(&mut self, state: QueryState, page: u32) -> (QueryState, QueryOutcome<'e>) {
        let engine = self.engine;
        let selection = self
            .cache
            .get_or_insert_with(|| Selection::compute(engine, &state));
        let outcome = engine.page_of(&selection.items, page);
        if outcome.is_no_results() {
            (state.exhausted(), outcome)
        } else {
            (state, outcome)
        }
    }
}
