//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for filmroom using the `clap` crate.
//! The commands are thin front ends over the library: they load a dataset,
//! build filter state from the arguments and print what the engine returns.
//!
//! # Commands
//!
//! - **filter**: Show plays matching set and range filters
//! - **facets**: Count the values of one filter category
//! - **search**: Find folders and items in the library by name
//! - **breadcrumb**: Show the ancestor chain of a folder
//! - **clips**: Keyword search over clips
//! - **config**: Show or initialise the configuration file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "filmroom")]
#[command(about = "Filter plays and search a film-room video library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level implied by the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show plays matching the given filters
    #[command(visible_alias = "f")]
    Filter {
        /// Plays dataset (JSON array); defaults to `plays_path` from config
        #[arg(short = 'p', long = "plays", value_name = "FILE")]
        plays: Option<PathBuf>,

        /// Set filter, values OR'd: -f down=1,2 -f hash=L
        #[arg(short = 'f', long = "filter", value_name = "CATEGORY=VALUES")]
        filters: Vec<String>,

        /// Range filter, inclusive: -r yardLine=20..40 -r distance=5
        #[arg(short = 'r', long = "range", value_name = "CATEGORY=LO..HI")]
        ranges: Vec<String>,

        /// Field zone chip (Own Territory, Midfield, Plus Territory, Red Zone)
        #[arg(short = 'z', long = "zone", value_name = "ZONE")]
        zones: Vec<String>,

        /// Print matching plays as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Count the distinct values of a filter category
    Facets {
        /// Plays dataset (JSON array); defaults to `plays_path` from config
        #[arg(short = 'p', long = "plays", value_name = "FILE")]
        plays: Option<PathBuf>,

        /// Category key, e.g. down, hash, playType, distanceType
        #[arg(value_name = "CATEGORY")]
        category: String,
    },

    /// Search the library tree by name
    #[command(visible_alias = "s")]
    Search {
        /// Library dataset (JSON array of folders); defaults to `library_path`
        #[arg(short = 'l', long = "library", value_name = "FILE")]
        library: Option<PathBuf>,

        /// Text to look for in folder and item names
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Show the path from the library root to a folder
    Breadcrumb {
        /// Library dataset (JSON array of folders); defaults to `library_path`
        #[arg(short = 'l', long = "library", value_name = "FILE")]
        library: Option<PathBuf>,

        /// Folder id; omit for the library root
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Keyword search over clips
    Clips {
        /// Clips dataset (JSON array); defaults to `clips_path` from config
        #[arg(short = 'c', long = "clips", value_name = "FILE")]
        clips: Option<PathBuf>,

        /// Maximum number of results (overrides config)
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,

        /// Keywords
        #[arg(value_name = "QUERY", num_args = 1.., required = true)]
        query: Vec<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_command() {
        let cli = Cli::try_parse_from([
            "filmroom", "-vv", "filter", "-p", "plays.json", "-f", "down=1,2", "-r",
            "yardLine=20..40", "--zone", "Red Zone",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Filter { plays, filters, ranges, zones, json } => {
                assert_eq!(plays, Some(PathBuf::from("plays.json")));
                assert_eq!(filters, vec!["down=1,2".to_string()]);
                assert_eq!(ranges, vec!["yardLine=20..40".to_string()]);
                assert_eq!(zones, vec!["Red Zone".to_string()]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_breadcrumb_without_id() {
        let cli = Cli::try_parse_from(["filmroom", "breadcrumb", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Breadcrumb { id: None, .. }));
    }

    #[test]
    fn test_clips_requires_query() {
        assert!(Cli::try_parse_from(["filmroom", "clips"]).is_err());
    }
}
