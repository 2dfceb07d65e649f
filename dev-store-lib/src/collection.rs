use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use dev_store_core::{Developer, DeveloperInfo, format_timestamp, parse_timestamp};

use crate::sort::{SortDirection, SortKey, SortState, locale_cmp};
use crate::storage::Storage;
use crate::store::JsonStore;

/// Storage slot holding the saved developer list.
pub const DEVELOPERS_KEY: &str = "developers";

/// Columns the saved-developer list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeveloperSortKey {
    Name,
    DateAdded,
}

impl SortKey for DeveloperSortKey {
    fn default_direction(self) -> SortDirection {
        SortDirection::Ascending
    }
}

impl Default for SortState<DeveloperSortKey> {
    /// Most recently added first.
    fn default() -> Self {
        SortState::with_direction(DeveloperSortKey::DateAdded, SortDirection::Descending)
    }
}

/// The saved developers, most recently added first, persisted after every
/// change.
///
/// This is the only place the list is mutated.
#[derive(Debug)]
pub struct DeveloperCollection<S: Storage> {
    developers: Vec<Developer>,
    store: JsonStore<S>,
}

impl<S: Storage> DeveloperCollection<S> {
    /// Load the collection from storage, starting empty if the slot is
    /// missing or unreadable.
    pub fn load(storage: S) -> Self {
        let store = JsonStore::new(storage);
        let developers = store.read(DEVELOPERS_KEY, Vec::new());
        log::debug!("Loaded {} saved developers", developers.len());
        Self { developers, store }
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    /// Save a newly resolved developer. Returns `false` (and changes nothing)
    /// if a developer with the same id is already saved.
    pub fn add(&mut self, info: DeveloperInfo) -> bool {
        self.add_at(info, Utc::now())
    }

    /// [`add`](Self::add) with an explicit creation time.
    pub fn add_at(&mut self, info: DeveloperInfo, now: DateTime<Utc>) -> bool {
        if self.contains(info.id) {
            log::debug!("Developer {} already saved, skipping add", info.id);
            return false;
        }
        let developer = Developer::from_info(info, format_timestamp(now));
        self.developers.insert(0, developer);
        self.persist();
        true
    }

    /// Remove a developer. Removing an unknown id is a no-op returning `false`.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.developers.len();
        self.developers.retain(|d| d.id != id);
        if self.developers.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Replace the developer with the same id, keeping its position.
    pub fn update(&mut self, developer: Developer) -> bool {
        match self.developers.iter_mut().find(|d| d.id == developer.id) {
            Some(slot) => {
                *slot = developer;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Overwrite the whole collection. Callers validate first; see
    /// [`crate::parse_import`].
    pub fn replace_all(&mut self, developers: Vec<Developer>) {
        self.developers = developers;
        self.persist();
    }

    /// Replace only the tag set of one developer.
    pub fn set_tags(&mut self, id: u64, tags: Vec<String>) -> bool {
        match self.get(id) {
            Some(existing) => {
                let updated = Developer {
                    tags: Some(tags),
                    ..existing.clone()
                };
                self.update(updated)
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Developer> {
        self.developers.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Developer] {
        &self.developers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Developer> {
        self.developers.iter()
    }

    pub fn len(&self) -> usize {
        self.developers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.developers.is_empty()
    }

    /// Every tag in use, sorted and deduplicated.
    pub fn all_tags(&self) -> Vec<String> {
        self.developers
            .iter()
            .flat_map(|d| d.tags().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Developers carrying `tag`, or all of them when no tag is given.
    pub fn filtered(&self, tag: Option<&str>) -> Vec<&Developer> {
        self.developers
            .iter()
            .filter(|d| tag.is_none_or(|t| d.has_tag(t)))
            .collect()
    }

    /// Filtered developers in display order. The stored order is unchanged.
    pub fn sorted(&self, tag: Option<&str>, sort: SortState<DeveloperSortKey>) -> Vec<&Developer> {
        let mut list = self.filtered(tag);
        list.sort_by(|a, b| {
            let ordering = match sort.key() {
                DeveloperSortKey::Name => locale_cmp(&a.name, &b.name),
                DeveloperSortKey::DateAdded => compare_instants(&a.date_added, &b.date_added),
            };
            sort.direction().apply(ordering)
        });
        list
    }

    fn persist(&mut self) {
        self.store.write(DEVELOPERS_KEY, &self.developers);
    }
}

/// Order two ISO-8601 strings by the instant they denote. Unparseable values
/// sort before every valid one.
pub(crate) fn compare_instants(a: &str, b: &str) -> Ordering {
    parse_timestamp(a).cmp(&parse_timestamp(b))
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
