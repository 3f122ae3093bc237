use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{ensure, Result};

/// Validates the parsed arguments and derives the replacement pair.
pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    ensure!(cli.spaces > 0, "--spaces must be a positive number");

    let tab = "\t".to_string();
    let spaces = " ".repeat(cli.spaces);

    // Default direction is tabs to spaces; -t swaps the pair.
    let (replace_from, replace_to) = if cli.spaces_to_tabs {
        (spaces, tab)
    } else {
        (tab, spaces)
    };

    Ok(RuntimeConfig {
        recursive: cli.recursive,
        start_only: cli.start_only,
        extension: cli.extension,
        target: cli.filename,
        replace_from,
        replace_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_pair_is_tab_to_four_spaces() {
        let config = resolve_config(parse(&["retab", "f.py"])).unwrap();
        assert_eq!(config.replace_from, "\t");
        assert_eq!(config.replace_to, "    ");
    }

    #[test]
    fn spaces_flag_sizes_the_pair() {
        let config = resolve_config(parse(&["retab", "-n", "2", "f.py"])).unwrap();
        assert_eq!(config.replace_to, "  ");
    }

    #[test]
    fn spaces_to_tabs_swaps_the_pair() {
        let config = resolve_config(parse(&["retab", "-t", "f.py"])).unwrap();
        assert_eq!(config.replace_from, "    ");
        assert_eq!(config.replace_to, "\t");
    }

    #[test]
    fn zero_spaces_is_rejected() {
        assert!(resolve_config(parse(&["retab", "-n", "0", "f.py"])).is_err());
    }
}
