//! Explicit query state passed into every pipeline call.
//!
//! # Invariants
//! - Keywords are stored normalized (trimmed, lower-cased, no blanks).
//! - Any keyword or sort-field update resets the cursor to `Idle(0)`.
//! - `Exhausted` is terminal until such an update.

use crate::query::filter::{normalize_keywords, parse_keywords};
use crate::query::sort::SortPolicy;

/// Page cursor state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    /// Showing pages `0..=n`.
    Idle(u32),
    /// Last query matched nothing.
    Exhausted,
}

impl PageCursor {
    /// Current page index, `None` when exhausted.
    pub fn page(self) -> Option<u32> {
        match self {
            Self::Idle(page) => Some(page),
            Self::Exhausted => None,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::Idle(0)
    }
}

/// User-controlled query inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    keywords: Vec<String>,
    sort_field: String,
    cursor: PageCursor,
}

impl QueryState {
    /// Creates a state at `Idle(0)`.
    pub fn new<I, S>(keywords: I, sort_field: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: normalize_keywords(keywords),
            sort_field: sort_field.into(),
            cursor: PageCursor::Idle(0),
        }
    }

    /// Creates a state from comma-separated keyword input.
    pub fn from_input(keywords: &str, sort_field: impl Into<String>) -> Self {
        Self::new(parse_keywords(keywords), sort_field)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Replaces keywords and resets the cursor.
    pub fn with_keywords<I, S>(self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: normalize_keywords(keywords),
            cursor: PageCursor::Idle(0),
            ..self
        }
    }

    /// Replaces the sort field and resets the cursor.
    pub fn with_sort_field(self, sort_field: impl Into<String>) -> Self {
        Self {
            sort_field: sort_field.into(),
            cursor: PageCursor::Idle(0),
            ..self
        }
    }

    /// Advances `Idle(n)` to `Idle(n + 1)`; `Exhausted` stays put.
    pub fn next_page(self) -> Self {
        let cursor = match self.cursor {
            PageCursor::Idle(page) => PageCursor::Idle(page.saturating_add(1)),
            PageCursor::Exhausted => PageCursor::Exhausted,
        };
        Self { cursor, ..self }
    }

    /// Resets the cursor to `Idle(0)`, leaving keywords and sort field as is.
    pub fn restart(self) -> Self {
        Self {
            cursor: PageCursor::Idle(0),
            ..self
        }
    }

    /// Marks the state as having matched nothing.
    pub fn exhausted(self) -> Self {
        Self {
            cursor: PageCursor::Exhausted,
            ..self
        }
    }

    /// Metadata-only fields for log events: keyword count and sort policy.
    pub(crate) fn log_fields(&self) -> String {
        format!(
            "keywords={} sort_policy={:?}",
            self.keywords.len(),
            SortPolicy::for_field(&self.sort_field)
        )
    }

    /// Jumps straight to `page`, e.g. when restoring a session.
    ///
    /// Ignored while exhausted.
    pub fn at_page(self, page: u32) -> Self {
        match self.cursor {
            PageCursor::Idle(_) => Self {
                cursor: PageCursor::Idle(page),
                ..self
            },
            PageCursor::Exhausted => self,
        }
    }
}
