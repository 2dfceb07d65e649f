use dev_store_core::{AppInfo, DeveloperInfo};
use dev_store_itunes::{CatalogClient, CatalogError, SoftwareRecord, Transport};

/// The remote operations the flows in this crate depend on.
///
/// Implemented by [`CatalogClient`]; tests provide canned implementations.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Search apps by name.
    async fn search(&self, term: &str) -> Result<Vec<SoftwareRecord>, CatalogError>;

    /// Resolve a store URL to the developer behind it.
    async fn resolve(&self, store_url: &str) -> Result<DeveloperInfo, CatalogError>;

    /// Fetch all apps of a developer.
    async fn apps(&self, developer_id: u64) -> Result<Vec<AppInfo>, CatalogError>;
}

impl<T: Transport> Catalog for CatalogClient<T> {
    async fn search(&self, term: &str) -> Result<Vec<SoftwareRecord>, CatalogError> {
        self.search_by_name(term).await
    }

    async fn resolve(&self, store_url: &str) -> Result<DeveloperInfo, CatalogError> {
        self.resolve_from_url(store_url).await
    }

    async fn apps(&self, developer_id: u64) -> Result<Vec<AppInfo>, CatalogError> {
        self.list_by_developer(developer_id).await
    }
}
