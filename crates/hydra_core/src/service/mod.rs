//! Gallery use-case services.
//!
//! # Responsibility
//! - Compose query stages into the engine callers run.
//! - Keep incremental paging state out of the pure pipeline.

pub mod gallery_session;
pub mod query_engine;
