use crate::model::item::Item;
use crate::render::{no_results_message, Renderer};
use crate::service::query_engine::ResultPage;
use std::io::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Plain-text renderer writing one line per item.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_item(&mut self, position: usize, item: &Item) -> io::Result<()> {
        writeln!(
            self.out,
            "{:>4}. {}  [{}]  created {}  modified {}",
            position + 1,
            item.id,
            item.tags.join(", "),
            item.created_at.format(DATE_FORMAT),
            item.modified_at.format(DATE_FORMAT)
        )
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_header(&mut self, last_updated: Option<&str>) -> io::Result<()> {
        match last_updated {
            Some(value) => writeln!(self.out, "Hydra gallery, last updated at {value}"),
            None => writeln!(self.out, "Hydra gallery"),
        }
    }

    fn render_page(&mut self, page: &ResultPage<'_>) -> io::Result<()> {
        for (position, item) in page.items.iter().enumerate() {
            self.write_item(position, item)?;
        }
        write!(
            self.out,
            "showing {} of {} match(es)",
            page.items.len(),
            page.total_matches
        )?;
        if page.has_more {
            write!(self.out, ", more available")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn render_no_results(&mut self, keywords: &[String]) -> io::Result<()> {
        writeln!(self.out, "{}", no_results_message(keywords))?;
        self.out.flush()
    }
}
