pub(crate) mod apps;
pub(crate) mod config;
pub(crate) mod developers;
pub(crate) mod search;
pub(crate) mod transfer;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_itunes::{CatalogClient, CatalogConfig};
use dev_store_lib::{AppState, Developer, FileStorage, SoftwareRecord, format_date, resolve_store_dir};

use crate::error::CliError;

/// Settings shared by every command.
pub(crate) struct Context {
    pub store_dir: PathBuf,
    pub quiet: bool,
}

impl Context {
    pub(crate) fn new(store_override: Option<PathBuf>, quiet: bool) -> Self {
        let store_dir = resolve_store_dir(store_override);
        log::debug!("Using store directory {}", store_dir.display());
        Self { store_dir, quiet }
    }

    /// Load the saved collection.
    pub(crate) fn open_state(&self) -> AppState<FileStorage> {
        AppState::load(FileStorage::new(&self.store_dir))
    }

    /// Build a catalog client from the resolved configuration.
    pub(crate) fn client(&self) -> Result<CatalogClient, CliError> {
        let config = CatalogConfig::load()?;
        log::debug!(
            "Catalog {} (country {}, relay {:?}, timeout {}s)",
            config.base_url,
            config.country,
            config.relay_prefix,
            config.timeout_secs,
        );
        Ok(CatalogClient::new(config)?)
    }
}

/// One developer as a list entry.
pub(crate) fn print_developer(developer: &Developer) {
    log::info!(
        "{} {}",
        developer.name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", developer.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !developer.tags().is_empty() {
        let tags: Vec<String> = developer.tags().iter().map(|t| format!("#{t}")).collect();
        log::info!("    {}", tags.join(" ").if_supports_color(Stdout, |t| t.cyan()));
    }
    log::info!("    {}", developer.url);
    log::info!("    追加日: {}", format_date(&developer.date_added));
}

/// One search result, numbered from 1.
pub(crate) fn print_record(position: usize, record: &SoftwareRecord) {
    log::info!(
        "  {} {} {}",
        format!("{position:>2}.").if_supports_color(Stdout, |t| t.dimmed()),
        record.track_name.if_supports_color(Stdout, |t| t.bold()),
        format!("by {} [{}]", record.artist_name, record.artist_id).if_supports_color(Stdout, |t| t.cyan()),
    );
}
