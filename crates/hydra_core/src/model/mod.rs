//! Gallery domain model.
//!
//! # Responsibility
//! - Define the normalized item record consumed by the query pipeline.
//! - Keep one shape for every field the user may sort by.
//!
//! # Invariants
//! - Items are identified by a unique `ItemId` within one `ItemSet`.
//! - Filtering hides items; nothing is removed from an `ItemSet`.

pub mod item;
pub mod item_set;
