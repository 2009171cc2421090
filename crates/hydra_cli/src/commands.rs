//! One-shot and interactive gallery commands.

use crate::cli::Cli;
use hydra_core::{
    init_logging, load_catalog, parse_keywords, parse_uri_keywords, read_query_state,
    render_outcome, CatalogError, ConfigError, FileCatalogSource, GallerySession,
    GalleryConfig, LoggingError, QueryEngine, QueryInput, QueryOutcome, QueryState, RenderTable,
    Renderer, TextRenderer,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const HELP_TEXT: &str = "commands: filter <kw,...> | sort <field> | more | help | quit";

/// Top-level CLI failure.
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Catalog(CatalogError),
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "output failed: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<CatalogError> for CliError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Interactive command parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Filter(String),
    Sort(String),
    More,
    Help,
    Quit,
}

/// Parses one interactive line; `None` for blank or unknown input.
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match verb.to_ascii_lowercase().as_str() {
        "filter" | "f" => Some(SessionCommand::Filter(rest.to_string())),
        "sort" | "s" if !rest.is_empty() => Some(SessionCommand::Sort(rest.to_string())),
        "more" | "m" => Some(SessionCommand::More),
        "help" | "?" => Some(SessionCommand::Help),
        "quit" | "exit" | "q" => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// Query input taken from command-line flags.
struct ArgsInput<'a> {
    cli: &'a Cli,
    config: &'a GalleryConfig,
}

impl QueryInput for ArgsInput<'_> {
    fn keyword_text(&self) -> String {
        self.cli.keywords.clone().unwrap_or_default()
    }

    fn sort_field(&self) -> String {
        self.cli
            .sort_field
            .clone()
            .unwrap_or_else(|| self.config.default_sort_field.clone())
    }
}

/// Runs the CLI: config, logging, catalog load, then one query or a session.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    let log_dir = cli
        .log_dir
        .as_ref()
        .map(|dir| dir.to_string_lossy().into_owned());
    init_logging(&config.log_level, log_dir.as_deref())?;

    let catalog = load_catalog(&FileCatalogSource::new(&cli.catalog))?;
    let last_updated = catalog.last_updated.clone();
    let state = initial_state(cli, &config);
    let engine = QueryEngine::new(catalog.items, config.page_size()?);
    info!(
        "event=cli_start module=cli status=ok items={} page_size={} interactive={}",
        engine.items().len(),
        engine.page_size(),
        cli.interactive
    );

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    renderer.render_header(last_updated.as_deref())?;

    if cli.interactive {
        let stdin = io::stdin();
        run_interactive(&engine, state, &mut renderer, stdin.lock())
    } else {
        let state = state.at_page(cli.page);
        let mut table = RenderTable::new(engine.items());
        table.reorder(engine.items(), state.sort_field());
        let outcome = engine.run(&state);
        show(&mut renderer, &mut table, &outcome, state.keywords())?;
        Ok(())
    }
}

/// Drives a session from line-oriented commands until `quit` or EOF.
pub fn run_interactive<W: Write>(
    engine: &QueryEngine,
    state: QueryState,
    renderer: &mut TextRenderer<W>,
    input: impl BufRead,
) -> Result<(), CliError> {
    let mut session = GallerySession::new(engine);
    let mut table = RenderTable::new(engine.items());
    table.reorder(engine.items(), state.sort_field());

    let (mut state, outcome) = session.apply(state);
    show(renderer, &mut table, &outcome, state.keywords())?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                warn!("event=cli_command module=cli status=rejected");
                eprintln!("{HELP_TEXT}");
            }
            continue;
        };

        let (next, outcome) = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                eprintln!("{HELP_TEXT}");
                continue;
            }
            SessionCommand::Filter(text) => {
                session.apply(state.with_keywords(parse_keywords(&text)))
            }
            SessionCommand::Sort(field) => {
                table.reorder(engine.items(), &field);
                session.apply(state.with_sort_field(field))
            }
            SessionCommand::More => session.load_more(state),
        };
        show(renderer, &mut table, &outcome, next.keywords())?;
        state = next;
    }
    Ok(())
}

/// Marks the outcome in the render table and prints it in display order.
fn show(
    renderer: &mut dyn Renderer,
    table: &mut RenderTable,
    outcome: &QueryOutcome<'_>,
    keywords: &[String],
) -> io::Result<()> {
    table.apply(outcome);
    render_outcome(renderer, &table.arrange(outcome), keywords)
}

fn resolve_config(cli: &Cli) -> Result<GalleryConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GalleryConfig::from_json_file(path)?,
        None => GalleryConfig::default(),
    }
    .apply_env()?;

    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(field) = &cli.sort_field {
        config.default_sort_field = field.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()
}

fn initial_state(cli: &Cli, config: &GalleryConfig) -> QueryState {
    let input = ArgsInput { cli, config };
    match &cli.uri {
        Some(query) => QueryState::new(parse_uri_keywords(query), input.sort_field()),
        None => read_query_state(&input),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run_interactive, SessionCommand};
    use chrono::{Duration, TimeZone, Utc};
    use hydra_core::{Item, ItemSet, QueryEngine, QueryState, TextRenderer};
    use std::num::NonZeroUsize;

    #[test]
    fn parse_command_understands_verbs_and_aliases() {
        assert_eq!(
            parse_command("  filter Solar, wind "),
            Some(SessionCommand::Filter("Solar, wind".to_string()))
        );
        assert_eq!(parse_command("filter"), Some(SessionCommand::Filter(String::new())));
        assert_eq!(
            parse_command("SORT created_at"),
            Some(SessionCommand::Sort("created_at".to_string()))
        );
        assert_eq!(parse_command("sort"), None);
        assert_eq!(parse_command("m"), Some(SessionCommand::More));
        assert_eq!(parse_command("exit"), Some(SessionCommand::Quit));
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn interactive_session_renders_each_command() {
        let at = Utc.with_ymd_and_hms(2015, 11, 18, 0, 0, 0).unwrap();
        let items = ["c", "b", "a"]
            .into_iter()
            .map(|id| Item::new(id, ["solar"], at, at))
            .collect::<Vec<_>>();
        let engine = QueryEngine::new(ItemSet::new(items), NonZeroUsize::new(1).unwrap());
        let mut renderer = TextRenderer::new(Vec::new());
        let input = "more\nfilter wind\nfilter solar\nquit\nmore\n".as_bytes();

        run_interactive(
            &engine,
            QueryState::from_input("", "id"),
            &mut renderer,
            input,
        )
        .expect("session runs");
        let text = String::from_utf8(renderer.into_inner()).expect("utf-8 output");

        assert!(text.contains("showing 1 of 3 match(es), more available"));
        assert!(text.contains("showing 2 of 3 match(es), more available"));
        assert!(text.contains("No Hydra found for wind. Try a different keyword."));
        assert_eq!(text.matches("showing").count(), 3);
    }

    fn printed_ids(block: &str) -> Vec<&str> {
        block
            .lines()
            .filter_map(|line| line.trim_start().split_once(". "))
            .filter_map(|(_, rest)| rest.split_whitespace().next())
            .collect()
    }

    #[test]
    fn sort_command_changes_printed_order() {
        let base = Utc.with_ymd_and_hms(2015, 11, 18, 0, 0, 0).unwrap();
        let items = [("b", 0), ("a", 1), ("c", 2)]
            .into_iter()
            .map(|(id, days)| {
                let at = base + Duration::days(days);
                Item::new(id, ["solar"], at, at)
            })
            .collect::<Vec<_>>();
        let engine = QueryEngine::new(ItemSet::new(items), NonZeroUsize::new(10).unwrap());
        let mut renderer = TextRenderer::new(Vec::new());

        run_interactive(
            &engine,
            QueryState::from_input("solar", "modified_at"),
            &mut renderer,
            "sort id\nsort modified_at\n".as_bytes(),
        )
        .expect("session runs");
        let text = String::from_utf8(renderer.into_inner()).expect("utf-8 output");
        let blocks = text.split("showing").collect::<Vec<_>>();

        assert_eq!(printed_ids(blocks[0]), vec!["c", "a", "b"]);
        assert_eq!(printed_ids(blocks[1]), vec!["a", "b", "c"]);
        assert_eq!(printed_ids(blocks[2]), vec!["c", "a", "b"]);
    }
}
