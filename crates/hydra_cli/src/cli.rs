//! CLI argument definitions for the Hydra gallery browser.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "hydra",
    version,
    about = "Browse a Hydra example catalog",
    long_about = "Filter a Hydra example catalog by keyword tags, sort it by any field and \
                  page through the results.\n\n\
                  Sorting by `id` is alphabetical; every other field sorts newest/largest first."
)]
pub struct Cli {
    /// Catalog JSON file with `last_updated` and `samples`.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Comma-separated keywords; an item matches if any keyword equals one of its tags.
    #[arg(long, short = 'k', value_name = "KEYWORDS")]
    pub keywords: Option<String>,

    /// Initial keywords as a URI query string, e.g. `?keywords=solar&keywords=wind`.
    #[arg(long, value_name = "QUERY", conflicts_with = "keywords")]
    pub uri: Option<String>,

    /// Field to sort by (default from config: `modified_at`).
    #[arg(long = "sort", short = 's', value_name = "FIELD")]
    pub sort_field: Option<String>,

    /// Page to show in one-shot mode; page N shows the first (N + 1) batches.
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Items per page (overrides config and HYDRA_PAGE_SIZE).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// JSON config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rotating log files to this absolute directory instead of stderr.
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Read `filter`, `sort`, `more` and `quit` commands from stdin.
    #[arg(long, short = 'i')]
    pub interactive: bool,
}
