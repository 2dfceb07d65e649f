use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_itunes::{CatalogConfig, ConfigSource};

use super::Context;
use crate::error::CliError;

/// Show resolved catalog settings and where each came from.
pub(crate) fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    let path = dev_store_itunes::config_path();
    let sources = dev_store_itunes::config_sources();

    log::info!("{}", "dev-store Configuration".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!(
        "  Store:       {}",
        ctx.store_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let config = CatalogConfig::load()?;
    let relay = if config.relay_prefix.is_empty() {
        "(direct)".to_string()
    } else {
        config.relay_prefix.clone()
    };

    let fields: [(&str, &ConfigSource, String); 4] = [
        ("relay_prefix", &sources.relay_prefix, relay),
        ("base_url", &sources.base_url, config.base_url.clone()),
        ("country", &sources.country, config.country.clone()),
        ("timeout_secs", &sources.timeout_secs, config.timeout_secs.to_string()),
    ];

    for (name, source, value) in &fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match dev_store_itunes::config_path() {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::Io(std::io::Error::other(
            "Could not determine config directory",
        ))),
    }
}
