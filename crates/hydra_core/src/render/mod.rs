//! Render collaborator seam and render-only state.
//!
//! # Responsibility
//! - Define the interface that turns query outcomes into visual output.
//! - Own per-item visibility/position outside the item model.
//!
//! # Invariants
//! - Renderers only consume outcomes; they never influence query results.

mod table;
mod text;

pub use table::{RenderSlot, RenderTable, Visibility};
pub use text::TextRenderer;

use crate::service::query_engine::{QueryOutcome, ResultPage};
use std::io;

/// Render collaborator.
pub trait Renderer {
    /// Shows the catalog refresh timestamp, if known.
    fn render_header(&mut self, last_updated: Option<&str>) -> io::Result<()>;
    /// Shows one growing-prefix page.
    fn render_page(&mut self, page: &ResultPage<'_>) -> io::Result<()>;
    /// Shows the informational "nothing matched" message.
    fn render_no_results(&mut self, keywords: &[String]) -> io::Result<()>;
}

/// Dispatches an outcome to the matching renderer call.
pub fn render_outcome(
    renderer: &mut dyn Renderer,
    outcome: &QueryOutcome<'_>,
    keywords: &[String],
) -> io::Result<()> {
    match outcome {
        QueryOutcome::NoResults => renderer.render_no_results(keywords),
        QueryOutcome::Page(page) => renderer.render_page(page),
    }
}

/// Message shown when no item matches `keywords`.
pub fn no_results_message(keywords: &[String]) -> String {
    format!(
        "No Hydra found for {}. Try a different keyword.",
        keywords.join(", ")
    )
}
