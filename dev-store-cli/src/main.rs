//! dev-store CLI
//!
//! Command-line interface for keeping a list of App Store developers and
//! browsing their published apps.

mod cli_types;
mod commands;
mod error;
mod prompt;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Context;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}

/// Route `log` output to stdout. Normal runs print bare messages; `--verbose`
/// adds timestamps and levels. `RUST_LOG` overrides the level either way.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::new(cli.store, cli.quiet);

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    match cli.command {
        Commands::List { sort, reverse, tag } => {
            commands::developers::run_list(&ctx, sort.map(Into::into), reverse, tag)
        }
        Commands::Tags => commands::developers::run_tags(&ctx),
        Commands::Search { term } => rt.block_on(commands::search::run_search_once(&ctx, &term)),
        Commands::Find => rt.block_on(commands::search::run_find(&ctx)),
        Commands::Add { index, term } => rt.block_on(commands::search::run_add(&ctx, &term, index)),
        Commands::AddUrl { url } => rt.block_on(commands::search::run_add_url(&ctx, &url)),
        Commands::Delete { id, yes } => commands::developers::run_delete(&ctx, id, yes),
        Commands::Apps { id, sort, reverse } => {
            rt.block_on(commands::apps::run_apps(&ctx, id, sort.map(Into::into), reverse))
        }
        Commands::Show { id, track_id } => rt.block_on(commands::apps::run_show(&ctx, id, track_id)),
        Commands::Tag { id, add, remove } => commands::developers::run_tag(&ctx, id, &add, &remove),
        Commands::Export { output } => commands::transfer::run_export(&ctx, output),
        Commands::Import { file, yes } => commands::transfer::run_import(&ctx, &file, yes),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
