//! Render-only side table for per-item visibility and position.
//!
//! # Invariants
//! - Keyed by item id; the query pipeline never reads or writes it.
//! - `reorder` starts from load order and uses `query::sort::sort_items`, so
//!   the element order always matches the data sort for the same field.
//! - Visible slots carry contiguous positions `0..n` following element order.

use crate::model::item::ItemId;
use crate::model::item_set::ItemSet;
use crate::query::sort::sort_items;
use crate::service::query_engine::{QueryOutcome, ResultPage};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Rendering state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSlot {
    pub visibility: Visibility,
    /// Display position among visible items.
    pub position: Option<usize>,
}

/// Visual element order plus per-item slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTable {
    order: Vec<ItemId>,
    slots: HashMap<ItemId, RenderSlot>,
}

impl RenderTable {
    /// Creates one element per item, all visible, in load order.
    pub fn new(items: &ItemSet) -> Self {
        let order = items.iter().map(|item| item.id.clone()).collect::<Vec<_>>();
        let slots = order
            .iter()
            .map(|id| {
                (
                    id.clone(),
                    RenderSlot {
                        visibility: Visibility::Visible,
                        position: None,
                    },
                )
            })
            .collect();
        Self { order, slots }
    }

    pub fn slot(&self, id: &str) -> Option<RenderSlot> {
        self.slots.get(id).copied()
    }

    /// Element order, visible or not.
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    /// Shows exactly the outcome's items and hides every other element.
    ///
    /// Positions follow the current element order, not the outcome order.
    pub fn apply(&mut self, outcome: &QueryOutcome<'_>) {
        for slot in self.slots.values_mut() {
            slot.visibility = Visibility::Hidden;
        }
        for item in outcome.items() {
            if let Some(slot) = self.slots.get_mut(item.id.as_str()) {
                slot.visibility = Visibility::Visible;
            }
        }
        self.renumber();
    }

    /// Re-orders elements by `field` without re-filtering.
    ///
    /// Sorts from load order with `sort_items`, never from the previous
    /// element order.
    pub fn reorder(&mut self, items: &ItemSet, field: &str) {
        let loaded = items.iter().collect::<Vec<_>>();
        self.order = sort_items(&loaded, field)
            .into_iter()
            .map(|item| item.id.clone())
            .collect();
        self.renumber();
    }

    /// Returns the outcome with its items in display position order.
    pub fn arrange<'a>(&self, outcome: &QueryOutcome<'a>) -> QueryOutcome<'a> {
        match outcome {
            QueryOutcome::NoResults => QueryOutcome::NoResults,
            QueryOutcome::Page(page) => {
                let mut items = page.items.clone();
                items.sort_by_key(|item| {
                    self.slot(&item.id)
                        .and_then(|slot| slot.position)
                        .unwrap_or(usize::MAX)
                });
                QueryOutcome::Page(ResultPage {
                    items,
                    ..page.clone()
                })
            }
        }
    }

    /// Visible ids sorted by display position.
    pub fn visible_ids(&self) -> Vec<&str> {
        let mut visible = self
            .order
            .iter()
            .filter_map(|id| {
                let slot = self.slots.get(id)?;
                match (slot.visibility, slot.position) {
                    (Visibility::Visible, Some(position)) => Some((position, id.as_str())),
                    _ => None,
                }
            })
            .collect::<Vec<_>>();
        visible.sort_by_key(|(position, _)| *position);
        visible.into_iter().map(|(_, id)| id).collect()
    }

    fn renumber(&mut self) {
        let mut next_position = 0;
        for id in &self.order {
            if let Some(slot) = self.slots.get_mut(id) {
                slot.position = None;
                if slot.visibility == Visibility::Visible {
                    slot.position = Some(next_position);
                    next_position += 1;
                }
            }
        }
    }
}
