use dev_store_core::AppInfo;
use dev_store_itunes::CatalogError;

use crate::catalog::Catalog;
use crate::collection::compare_instants;
use crate::sort::{SortDirection, SortKey, SortState, locale_cmp};

/// Columns an app list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSortKey {
    Name,
    ReleaseDate,
}

impl SortKey for AppSortKey {
    fn default_direction(self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Ascending,
            // Newest releases first
            Self::ReleaseDate => SortDirection::Descending,
        }
    }
}

impl Default for SortState<AppSortKey> {
    fn default() -> Self {
        SortState::new(AppSortKey::ReleaseDate)
    }
}

/// The apps of one developer, as fetched, plus the current sort.
#[derive(Debug, Clone)]
pub struct AppBrowser {
    developer_id: u64,
    apps: Vec<AppInfo>,
    sort: SortState<AppSortKey>,
}

impl AppBrowser {
    /// Fetch a developer's apps.
    pub async fn load<C: Catalog>(catalog: &C, developer_id: u64) -> Result<Self, CatalogError> {
        let apps = catalog.apps(developer_id).await?;
        log::debug!("Fetched {} apps for developer {}", apps.len(), developer_id);
        Ok(Self::from_apps(developer_id, apps))
    }

    pub fn from_apps(developer_id: u64, apps: Vec<AppInfo>) -> Self {
        Self {
            developer_id,
            apps,
            sort: SortState::default(),
        }
    }

    pub fn developer_id(&self) -> u64 {
        self.developer_id
    }

    /// Apps in the order the catalog returned them.
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    pub fn sort(&self) -> SortState<AppSortKey> {
        self.sort
    }

    /// Select a sort key (flipping direction if it is already selected).
    pub fn sort_by(&mut self, key: AppSortKey) {
        self.sort.toggle(key);
    }

    pub fn set_sort(&mut self, sort: SortState<AppSortKey>) {
        self.sort = sort;
    }

    /// Apps in display order, recomputed from the fetched list each call.
    pub fn sorted(&self) -> Vec<&AppInfo> {
        let mut list: Vec<&AppInfo> = self.apps.iter().collect();
        let sort = self.sort;
        list.sort_by(|a, b| {
            let ordering = match sort.key() {
                AppSortKey::Name => locale_cmp(&a.track_name, &b.track_name),
                AppSortKey::ReleaseDate => compare_instants(&a.release_date, &b.release_date),
            };
            sort.direction().apply(ordering)
        });
        list
    }

    pub fn find(&self, track_id: u64) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.track_id == track_id)
    }
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
