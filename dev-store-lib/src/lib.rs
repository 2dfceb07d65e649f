//! dev-store library: the saved-developer collection and the flows that
//! browse, search, tag, import and export it.
//!
//! Frontends own an [`AppState`] and drive it; remote calls go through a
//! [`Catalog`] (normally a [`dev_store_itunes::CatalogClient`]) and local
//! persistence through a [`Storage`] backend.

pub mod browser;
pub mod catalog;
pub mod collection;
pub mod confirm;
pub mod detail;
pub mod error;
pub mod search;
pub mod settings;
pub mod sort;
pub mod state;
pub mod storage;
pub mod store;
pub mod tags;
pub mod transfer;

pub use browser::{AppBrowser, AppSortKey};
pub use catalog::Catalog;
pub use collection::{DEVELOPERS_KEY, DeveloperCollection, DeveloperSortKey};
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use detail::{AppDetail, format_date, format_rating_count};
pub use error::{ImportError, TagRejection};
pub use search::{
    AddOutcome, Debouncer, SEARCH_DEBOUNCE, SearchState, SearchTicket, add_from_search,
    add_from_url, run_search,
};
pub use settings::{ENV_STORE_DIR, default_store_dir, resolve_store_dir};
pub use sort::{SortDirection, SortKey, SortState, locale_cmp};
pub use state::{AppState, DeleteOutcome, IMPORT_PROMPT, ImportOutcome, View};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::JsonStore;
pub use tags::TagEditor;
pub use transfer::{export_file_name, export_json, parse_import};

pub use dev_store_core::{AppInfo, Developer, DeveloperInfo};
pub use dev_store_itunes::{CatalogError, SoftwareRecord};
