//! Filter/sort/paginate pipeline stages.
//!
//! # Responsibility
//! - Provide the pure stages the query engine composes.
//! - Own the explicit `QueryState` value and its page-cursor state machine.
//!
//! # Invariants
//! - Every stage is a pure function of its arguments.
//! - Stages never mutate the item set they read.

pub mod filter;
pub mod input;
pub mod paginate;
pub mod sort;
pub mod state;
