//! Finding developers to save: debounced name search and add-by-URL.
//!
//! Typing produces a stream of raw terms. [`Debouncer`] turns it into settled
//! terms, each settled term is searched under a [`SearchTicket`], and
//! [`SearchState::complete`] drops any result whose ticket no longer matches
//! the latest settled term. Overlapping requests can therefore finish in any
//! order without an older one overwriting a newer one.

use std::time::Duration;

use futures::stream::{Fuse, FuturesUnordered};
use futures::{Stream, StreamExt};
use tokio::time::Instant;

use dev_store_core::DeveloperInfo;
use dev_store_itunes::{CatalogError, SoftwareRecord};

use crate::catalog::Catalog;
use crate::collection::DeveloperCollection;
use crate::storage::Storage;

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Emits an input only once no newer input has arrived for the quiet period.
///
/// [`next_settled`](Self::next_settled) is cancel-safe: pending input and the
/// running deadline live in the struct, so dropping the future inside a
/// `select!` loses nothing.
pub struct Debouncer<S: Stream> {
    inputs: Fuse<S>,
    quiet: Duration,
    pending: Option<S::Item>,
    deadline: Option<Instant>,
}

impl<S: Stream + Unpin> Debouncer<S> {
    pub fn new(inputs: S, quiet: Duration) -> Self {
        Self {
            inputs: inputs.fuse(),
            quiet,
            pending: None,
            deadline: None,
        }
    }

    /// Wait for the next settled input. Returns `None` once the input stream
    /// ends; input that had not yet been quiet for the full period is dropped.
    pub async fn next_settled(&mut self) -> Option<S::Item> {
        loop {
            let Some(deadline) = self.deadline else {
                let value = self.inputs.next().await?;
                self.arm(value);
                continue;
            };

            tokio::select! {
                next = self.inputs.next() => match next {
                    Some(value) => self.arm(value),
                    None => {
                        self.deadline = None;
                        self.pending = None;
                        return None;
                    }
                },
                _ = tokio::time::sleep_until(deadline) => {
                    self.deadline = None;
                    return self.pending.take();
                }
            }
        }
    }

    fn arm(&mut self, value: S::Item) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.quiet);
    }
}

/// Identifies the term a search request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    term: String,
}

impl SearchTicket {
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// The search panel: latest settled term, its results, and request status.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    term: String,
    results: Vec<SoftwareRecord>,
    loading: bool,
    error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `term` as the current settled term.
    ///
    /// Returns a ticket to issue a request under, or `None` for a blank term
    /// (results are cleared and nothing should be sent).
    pub fn begin(&mut self, term: &str) -> Option<SearchTicket> {
        self.term = term.to_string();
        if term.trim().is_empty() {
            self.results.clear();
            self.loading = false;
            self.error = None;
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(SearchTicket {
            term: term.to_string(),
        })
    }

    /// Apply a finished request. Returns `false`, changing nothing, if the
    /// ticket's term is no longer the current term.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<SoftwareRecord>, CatalogError>,
    ) -> bool {
        if ticket.term != self.term {
            log::debug!(
                "Discarding stale search results for {:?} (current term {:?})",
                ticket.term,
                self.term
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Search for {:?} failed: {}", ticket.term, e);
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    /// Reset after a result was chosen.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &[SoftwareRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Drive incremental search from a stream of raw input terms until the
/// stream ends.
///
/// `on_update` is called whenever the visible state changes. Requests for
/// successive terms may overlap; stale completions are discarded. Requests
/// still running when the input closes are dropped unapplied.
pub async fn run_search<C, S>(
    catalog: &C,
    inputs: S,
    state: &mut SearchState,
    mut on_update: impl FnMut(&SearchState),
) where
    C: Catalog,
    S: Stream<Item = String> + Unpin,
{
    let mut debouncer = Debouncer::new(inputs, SEARCH_DEBOUNCE);
    let mut in_flight = FuturesUnordered::new();
    let mut last_settled: Option<String> = None;

    loop {
        tokio::select! {
            settled = debouncer.next_settled() => {
                let Some(term) = settled else {
                    log::debug!("Search input closed with {} request(s) in flight", in_flight.len());
                    break;
                };
                if last_settled.as_deref() == Some(term.as_str()) {
                    continue;
                }
                log::debug!("Search term settled: {:?}", term);
                last_settled = Some(term.clone());
                if let Some(ticket) = state.begin(&term) {
                    in_flight.push(async move {
                        let result = catalog.search(ticket.term()).await;
                        (ticket, result)
                    });
                }
                on_update(&*state);
            }
            Some((ticket, result)) = in_flight.next(), if !in_flight.is_empty() => {
                if state.complete(ticket, result) {
                    on_update(&*state);
                }
            }
        }
    }
}

/// Result of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Saved as a new developer
    Added(DeveloperInfo),
    /// A developer with this id was already saved
    AlreadySaved(DeveloperInfo),
    /// Nothing to do (blank input)
    Skipped,
}

/// Save the publisher of a search result.
pub fn add_from_search<S: Storage>(
    collection: &mut DeveloperCollection<S>,
    record: &SoftwareRecord,
) -> AddOutcome {
    save(collection, record.publisher())
}

/// Resolve a store URL and save the developer behind it.
pub async fn add_from_url<S: Storage, C: Catalog>(
    collection: &mut DeveloperCollection<S>,
    catalog: &C,
    store_url: &str,
) -> Result<AddOutcome, CatalogError> {
    let store_url = store_url.trim();
    if store_url.is_empty() {
        return Ok(AddOutcome::Skipped);
    }
    let info = catalog.resolve(store_url).await?;
    Ok(save(collection, info))
}

fn save<S: Storage>(collection: &mut DeveloperCollection<S>, info: DeveloperInfo) -> AddOutcome {
    if collection.add(info.clone()) {
        log::debug!("Saved developer {} ({})", info.id, info.name);
        AddOutcome::Added(info)
    } else {
        AddOutcome::AlreadySaved(info)
    }
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
