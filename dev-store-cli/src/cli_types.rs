//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use dev_store_lib::{AppSortKey, DeveloperSortKey};

#[derive(Parser)]
#[command(name = "dev-store")]
#[command(about = "Keep a list of App Store developers and browse their apps", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the saved collection (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show saved developers
    List {
        /// Sort column (default: most recently added first)
        #[arg(long, value_enum)]
        sort: Option<DeveloperSortArg>,

        /// Reverse the sort direction
        #[arg(short, long)]
        reverse: bool,

        /// Only show developers with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List every tag in use
    Tags,

    /// Search the store by app name and print the results
    Search {
        /// Search term
        term: String,
    },

    /// Interactive search: type terms line by line, `:add N` to save a result
    Find,

    /// Search by app name and save the developer of result N
    Add {
        /// 1-based position in the search results
        index: usize,

        /// Search term
        #[arg(long)]
        term: String,
    },

    /// Save the developer behind an App Store URL
    AddUrl {
        /// Developer or app page URL (must contain `/id<digits>`)
        url: String,
    },

    /// Remove a saved developer
    Delete {
        /// Developer id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Browse a saved developer's apps
    Apps {
        /// Developer id
        id: u64,

        /// Sort column (default: newest release first)
        #[arg(long, value_enum)]
        sort: Option<AppSortArg>,

        /// Reverse the sort direction
        #[arg(short, long)]
        reverse: bool,
    },

    /// Show one app in detail
    Show {
        /// Developer id
        id: u64,

        /// App (track) id
        track_id: u64,
    },

    /// Edit a developer's tags
    Tag {
        /// Developer id
        id: u64,

        /// Tags to add
        #[arg(short, long)]
        add: Vec<String>,

        /// Tags to remove
        #[arg(short, long)]
        remove: Vec<String>,
    },

    /// Write the collection to a JSON file
    Export {
        /// Output file (default: dev_store_export_<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the collection with the contents of a JSON export
    Import {
        /// Export file to read
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Inspect catalog configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the config file path
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum DeveloperSortArg {
    Name,
    Added,
}

impl From<DeveloperSortArg> for DeveloperSortKey {
    fn from(arg: DeveloperSortArg) -> Self {
        match arg {
            DeveloperSortArg::Name => Self::Name,
            DeveloperSortArg::Added => Self::DateAdded,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum AppSortArg {
    Name,
    Release,
}

impl From<AppSortArg> for AppSortKey {
    fn from(arg: AppSortArg) -> Self {
        match arg {
            AppSortArg::Name => Self::Name,
            AppSortArg::Release => Self::ReleaseDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tag_accepts_repeated_flags() {
        let cli = Cli::try_parse_from(["dev-store", "tag", "7", "--add", "a", "--add", "b", "-r", "c"]).unwrap();
        match cli.command {
            Commands::Tag { id, add, remove } => {
                assert_eq!(id, 7);
                assert_eq!(add, vec!["a", "b"]);
                assert_eq!(remove, vec!["c"]);
            }
            _ => panic!("expected tag command"),
        }
    }

    #[test]
    fn global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["dev-store", "list", "--sort", "name", "--store", "/tmp/x"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Commands::List { sort: Some(DeveloperSortArg::Name), reverse: false, tag: None }
        ));
    }
}
