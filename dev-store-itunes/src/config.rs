use std::path::PathBuf;
use std::time::Duration;

use crate::error::CatalogError;

pub const DEFAULT_RELAY_PREFIX: &str = "https://corsproxy.io/?";
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_COUNTRY: &str = "jp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_RELAY: &str = "DEV_STORE_RELAY";
const ENV_BASE_URL: &str = "DEV_STORE_BASE_URL";
const ENV_COUNTRY: &str = "DEV_STORE_COUNTRY";
const ENV_TIMEOUT: &str = "DEV_STORE_TIMEOUT_SECS";

/// Where the catalog API lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Prefix the percent-encoded API URL is appended to. Empty means the
    /// API is called directly.
    pub relay_prefix: String,
    pub base_url: String,
    /// Storefront country code sent with every request.
    pub country: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            relay_prefix: DEFAULT_RELAY_PREFIX.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub relay_prefix: ConfigSource,
    pub base_url: ConfigSource,
    pub country: ConfigSource,
    pub timeout_secs: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    catalog: Option<CatalogSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct CatalogSection {
    relay_prefix: Option<String>,
    base_url: Option<String>,
    country: Option<String>,
    timeout_secs: Option<u64>,
}

impl CatalogConfig {
    /// Load config from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > built-in defaults.
    pub fn load() -> Result<Self, CatalogError> {
        let file = load_config_file().unwrap_or_default();

        let relay_prefix = std::env::var(ENV_RELAY)
            .ok()
            .or(file.relay_prefix)
            .unwrap_or_else(|| DEFAULT_RELAY_PREFIX.to_string());

        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let country = std::env::var(ENV_COUNTRY)
            .ok()
            .or(file.country)
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        let timeout_secs = match std::env::var(ENV_TIMEOUT) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                CatalogError::config(format!("{} must be a whole number of seconds, got {:?}", ENV_TIMEOUT, raw))
            })?,
            Err(_) => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            relay_prefix,
            base_url,
            country,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.timeout_secs == 0 {
            return Err(CatalogError::config("timeout_secs must be greater than zero"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| CatalogError::config(format!("Invalid base_url {:?}: {}", self.base_url, e)))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Wrap an API URL in the relay, percent-encoding it as one component.
    pub fn relay_url(&self, api_url: &str) -> String {
        if self.relay_prefix.is_empty() {
            return api_url.to_string();
        }
        let encoded: String = url::form_urlencoded::byte_serialize(api_url.as_bytes()).collect();
        format!("{}{}", self.relay_prefix, encoded)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dev-store").join("config.toml"))
}

/// Determine where each config field is coming from.
pub fn config_sources() -> ConfigSources {
    let file = load_config_file().unwrap_or_default();

    let pick = |var: &'static str, in_file: bool| {
        if std::env::var(var).is_ok() {
            ConfigSource::EnvVar(var)
        } else if in_file {
            ConfigSource::ConfigFile
        } else {
            ConfigSource::Default
        }
    };

    ConfigSources {
        relay_prefix: pick(ENV_RELAY, file.relay_prefix.is_some()),
        base_url: pick(ENV_BASE_URL, file.base_url.is_some()),
        country: pick(ENV_COUNTRY, file.country.is_some()),
        timeout_secs: pick(ENV_TIMEOUT, file.timeout_secs.is_some()),
    }
}

fn load_config_file() -> Option<CatalogSection> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.catalog,
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_url_encodes_api_url_as_one_component() {
        let config = CatalogConfig::default();
        let wrapped = config.relay_url("https://itunes.apple.com/lookup?id=1&country=jp");
        assert_eq!(
            wrapped,
            "https://corsproxy.io/?https%3A%2F%2Fitunes.apple.com%2Flookup%3Fid%3D1%26country%3Djp"
        );
    }

    #[test]
    fn empty_relay_calls_api_directly() {
        let config = CatalogConfig {
            relay_prefix: String::new(),
            ..CatalogConfig::default()
        };
        assert_eq!(config.relay_url("https://x.test/a?b=c"), "https://x.test/a?b=c");
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = CatalogConfig {
            timeout_secs: 0,
            ..CatalogConfig::default()
        };
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let config = CatalogConfig {
            base_url: "not a url".to_string(),
            ..CatalogConfig::default()
        };
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn config_file_section_parses() {
        let parsed: ConfigFile = toml::from_str(
            "[catalog]\ncountry = \"us\"\ntimeout_secs = 10\n",
        )
        .unwrap();
        let section = parsed.catalog.unwrap();
        assert_eq!(section.country.as_deref(), Some("us"));
        assert_eq!(section.timeout_secs, Some(10));
        assert!(section.relay_prefix.is_none());
    }
}
