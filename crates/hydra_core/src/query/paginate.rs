//! Growing-prefix pagination.
//!
//! # Invariants
//! - An empty input always yields `PageOutcome::NoResults`; a page is never
//!   empty.
//! - Page `n` returns the first `page_size * (n + 1)` items (or all of them),
//!   so each page repeats everything shown before plus one batch.

use std::num::NonZeroUsize;

/// Result of paginating one sorted, filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome<'s, T> {
    /// The input had no items at all.
    NoResults,
    /// A non-empty prefix of the input.
    Page {
        items: &'s [T],
        /// `false` once the prefix covers the whole input.
        has_more: bool,
    },
}

/// Number of items visible at page `page`.
pub fn window_len(page: u32, page_size: NonZeroUsize) -> usize {
    let pages = usize::try_from(page)
        .unwrap_or(usize::MAX)
        .saturating_add(1);
    page_size.get().saturating_mul(pages)
}

/// Returns the prefix of `sorted` visible at `page`.
pub fn paginate<T>(sorted: &[T], page: u32, page_size: NonZeroUsize) -> PageOutcome<'_, T> {
    if sorted.is_empty() {
        return PageOutcome::NoResults;
    }

    let window = window_len(page, page_size);
    if sorted.len() < window {
        PageOutcome::Page {
            items: sorted,
            has_more: false,
        }
    } else {
        PageOutcome::Page {
            items: &sorted[..window],
            has_more: sorted.len() > window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, window_len, PageOutcome};
    use std::num::NonZeroUsize;

    fn size(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero page size")
    }

    #[test]
    fn exact_fit_returns_prefix_without_more() {
        let data = [1, 2, 3, 4];
        assert_eq!(
            paginate(&data, 1, size(2)),
            PageOutcome::Page {
                items: &data[..],
                has_more: false
            }
        );
    }

    #[test]
    fn empty_input_is_no_results_for_any_page() {
        let data: [u8; 0] = [];
        assert_eq!(paginate(&data, 0, size(3)), PageOutcome::NoResults);
        assert_eq!(paginate(&data, 7, size(3)), PageOutcome::NoResults);
    }

    #[test]
    fn window_len_saturates() {
        assert_eq!(window_len(u32::MAX, size(usize::MAX)), usize::MAX);
        assert_eq!(window_len(0, size(12)), 12);
    }

    #[test]
    fn far_page_returns_everything() {
        let data = [1, 2, 3];
        assert_eq!(
            paginate(&data, 50, size(2)),
            PageOutcome::Page {
                items: &data[..],
                has_more: false
            }
        );
    }
}
