//! Hydra gallery browser CLI.

use clap::Parser;

mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::run;

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            log::error!("event=cli_exit module=cli status=error error={error}");
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn uri_and_keywords_conflict() {
        let result = Cli::try_parse_from([
            "hydra",
            "catalog.json",
            "--keywords",
            "solar",
            "--uri",
            "?keywords=wind",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_first_page_one_shot() {
        let cli = Cli::try_parse_from(["hydra", "catalog.json", "-s", "id"]).unwrap();
        assert_eq!(cli.page, 0);
        assert!(!cli.interactive);
        assert_eq!(cli.sort_field.as_deref(), Some("id"));
        assert!(cli.page_size.is_none());
    }
}
