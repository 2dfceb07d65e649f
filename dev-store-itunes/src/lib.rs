pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigSource, ConfigSources, config_path, config_sources};
pub use error::CatalogError;
pub use lookup::{apps_for_artist, developer_from_lookup, extract_store_id, software_only};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
pub use types::{ArtistRecord, LookupRecord, LookupResponse, SoftwareRecord};
