use dev_store_core::Developer;

use crate::collection::{DeveloperCollection, DeveloperSortKey};
use crate::confirm::Confirm;
use crate::error::ImportError;
use crate::sort::SortState;
use crate::storage::Storage;
use crate::transfer::parse_import;

/// Prompt shown before overwriting the collection with an import.
pub const IMPORT_PROMPT: &str =
    "現在のリストをインポートしたデータで上書きしますか？この操作は元に戻せません。";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Collection,
    /// One developer's app list.
    Developer(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The collection now holds this many developers.
    Imported(usize),
    Declined,
}

/// Everything a frontend session holds: the collection, the current view,
/// and the developer list's filter and sort.
#[derive(Debug)]
pub struct AppState<S: Storage> {
    collection: DeveloperCollection<S>,
    view: View,
    tag_filter: Option<String>,
    sort: SortState<DeveloperSortKey>,
}

impl<S: Storage> AppState<S> {
    pub fn new(collection: DeveloperCollection<S>) -> Self {
        Self {
            collection,
            view: View::default(),
            tag_filter: None,
            sort: SortState::default(),
        }
    }

    /// Load the collection from `storage` and start on the collection view.
    pub fn load(storage: S) -> Self {
        Self::new(DeveloperCollection::load(storage))
    }

    pub fn collection(&self) -> &DeveloperCollection<S> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut DeveloperCollection<S> {
        &mut self.collection
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Open a developer. Returns `false` for an id that isn't saved.
    pub fn select(&mut self, id: u64) -> bool {
        if !self.collection.contains(id) {
            return false;
        }
        self.view = View::Developer(id);
        true
    }

    pub fn back(&mut self) {
        self.view = View::Collection;
    }

    /// The developer being viewed, if any.
    pub fn selected(&self) -> Option<&Developer> {
        match self.view {
            View::Developer(id) => self.collection.get(id),
            View::Collection => None,
        }
    }

    pub fn tag_filter(&self) -> Option<&str> {
        self.tag_filter.as_deref()
    }

    pub fn set_tag_filter(&mut self, tag: Option<String>) {
        self.tag_filter = tag;
    }

    pub fn sort(&self) -> SortState<DeveloperSortKey> {
        self.sort
    }

    pub fn sort_by(&mut self, key: DeveloperSortKey) {
        self.sort.toggle(key);
    }

    pub fn set_sort(&mut self, sort: SortState<DeveloperSortKey>) {
        self.sort = sort;
    }

    /// The developer list as displayed: filtered by the active tag, then sorted.
    pub fn visible(&self) -> Vec<&Developer> {
        self.collection.sorted(self.tag_filter(), self.sort)
    }

    /// Delete a developer after the user confirms.
    pub fn delete_developer(&mut self, id: u64, confirm: &dyn Confirm) -> DeleteOutcome {
        let Some(developer) = self.collection.get(id) else {
            return DeleteOutcome::NotFound;
        };
        let prompt = format!("「{}」をリストから削除しますか？", developer.name);
        if !confirm.confirm(&prompt) {
            return DeleteOutcome::Declined;
        }
        self.collection.delete(id);
        if self.view == View::Developer(id) {
            self.view = View::Collection;
        }
        log::debug!("Deleted developer {id}");
        DeleteOutcome::Deleted
    }

    /// Validate an import document, confirm, then overwrite the collection.
    ///
    /// Invalid documents are rejected before the user is asked anything.
    pub fn import(&mut self, text: &str, confirm: &dyn Confirm) -> Result<ImportOutcome, ImportError> {
        let developers = parse_import(text)?;
        if !confirm.confirm(IMPORT_PROMPT) {
            return Ok(ImportOutcome::Declined);
        }
        let count = developers.len();
        self.collection.replace_all(developers);
        self.view = View::Collection;
        self.tag_filter = None;
        log::debug!("Imported {count} developers");
        Ok(ImportOutcome::Imported(count))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::confirm::{AlwaysConfirm, NeverConfirm};
    use crate::storage::MemoryStorage;
    use dev_store_core::DeveloperInfo;

    /// Records prompts and answers with a fixed reply.
    struct Recorder {
        answer: bool,
        prompts: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirm for Recorder {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }

    fn state_with(ids: &[u64]) -> AppState<MemoryStorage> {
        let mut state = AppState::load(MemoryStorage::new());
        for &id in ids {
            state.collection_mut().add(DeveloperInfo {
                id,
                name: format!("Dev {id}"),
                url: String::new(),
                icon_url: String::new(),
            });
        }
        state
    }

    #[test]
    fn select_and_back() {
        let mut state = state_with(&[1]);
        assert!(!state.select(9));
        assert_eq!(state.view(), View::Collection);

        assert!(state.select(1));
        assert_eq!(state.selected().unwrap().id, 1);
        state.back();
        assert!(state.selected().is_none());
    }

    #[test]
    fn delete_asks_with_developer_name() {
        let mut state = state_with(&[1]);
        let confirm = Recorder::new(true);
        assert_eq!(state.delete_developer(1, &confirm), DeleteOutcome::Deleted);
        assert_eq!(confirm.prompts.borrow().as_slice(), ["「Dev 1」をリストから削除しますか？"]);
        assert!(state.collection().is_empty());
    }

    #[test]
    fn declined_delete_keeps_developer() {
        let mut state = state_with(&[1]);
        assert_eq!(state.delete_developer(1, &NeverConfirm), DeleteOutcome::Declined);
        assert_eq!(state.collection().len(), 1);
    }

    #[test]
    fn delete_unknown_does_not_prompt() {
        let mut state = state_with(&[1]);
        let confirm = Recorder::new(true);
        assert_eq!(state.delete_developer(2, &confirm), DeleteOutcome::NotFound);
        assert!(confirm.prompts.borrow().is_empty());
    }

    #[test]
    fn deleting_viewed_developer_returns_to_collection() {
        let mut state = state_with(&[1, 2]);
        state.select(1);
        state.delete_developer(2, &AlwaysConfirm);
        assert_eq!(state.view(), View::Developer(1));
        state.delete_developer(1, &AlwaysConfirm);
        assert_eq!(state.view(), View::Collection);
    }

    #[test]
    fn invalid_import_never_prompts_or_writes() {
        let mut state = state_with(&[1]);
        let confirm = Recorder::new(true);
        let before = state.collection().storage().raw(crate::DEVELOPERS_KEY).map(String::from);

        let err = state
            .import(r#"[{"id":5,"name":"n","url":"u","dateAdded":"d"}]"#, &confirm)
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidEntry { .. }));
        assert!(confirm.prompts.borrow().is_empty());
        assert_eq!(state.collection().get(1).unwrap().name, "Dev 1");
        assert_eq!(state.collection().storage().raw(crate::DEVELOPERS_KEY).map(String::from), before);
    }

    #[test]
    fn declined_import_keeps_collection() {
        let mut state = state_with(&[1]);
        let doc = r#"[{"id":5,"name":"n","url":"u","dateAdded":"d","iconUrl":"i"}]"#;
        assert_eq!(state.import(doc, &NeverConfirm).unwrap(), ImportOutcome::Declined);
        assert!(state.collection().contains(1));
        assert!(!state.collection().contains(5));
    }

    #[test]
    fn confirmed_import_replaces_collection() {
        let mut state = state_with(&[1]);
        state.set_tag_filter(Some("games".to_string()));
        let confirm = Recorder::new(true);
        let doc = r#"[{"id":5,"name":"n","url":"u","dateAdded":"d","iconUrl":"i","tags":["a"]}]"#;

        assert_eq!(state.import(doc, &confirm).unwrap(), ImportOutcome::Imported(1));
        assert_eq!(confirm.prompts.borrow().as_slice(), [IMPORT_PROMPT]);
        assert!(!state.collection().contains(1));
        assert_eq!(state.collection().get(5).unwrap().tags(), ["a"]);
        assert!(state.tag_filter().is_none());
    }

    #[test]
    fn visible_applies_filter_and_sort() {
        let mut state = state_with(&[1, 2, 3]);
        state.collection_mut().set_tags(1, vec!["x".to_string()]);
        state.collection_mut().set_tags(3, vec!["x".to_string()]);
        state.set_tag_filter(Some("x".to_string()));
        state.set_sort(SortState::new(DeveloperSortKey::Name));

        let ids: Vec<u64> = state.visible().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
