//! Working copy of a custom list's entries, reconciled against search results.

use desk_core::entities::{IdentifierPath, ListEntry, SearchResultBook, SearchResults};
use desk_core::enums::Droppable;

use crate::changes::{entries_changed, not_yet_in_list};
use crate::drag::DragState;

/// Entries of one list being edited, plus the search page they are edited against.
///
/// Every membership command is atomic and ends the current drag. Identifiers
/// that cannot be found are silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct ListReconciler {
    baseline: Vec<ListEntry>,
    entries: Vec<ListEntry>,
    results: SearchResults,
    path: IdentifierPath,
    drag: DragState,
}

impl ListReconciler {
    /// Start editing `entries`, which also become the baseline for change detection.
    #[must_use]
    pub fn new(entries: Vec<ListEntry>, path: IdentifierPath) -> Self {
        Self {
            baseline: entries.clone(),
            entries,
            results: SearchResults::default(),
            path,
            drag: DragState::Idle,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    #[must_use]
    pub fn baseline(&self) -> &[ListEntry] {
        &self.baseline
    }

    #[must_use]
    pub const fn search_results(&self) -> &SearchResults {
        &self.results
    }

    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub const fn identifier_path(&self) -> &IdentifierPath {
        &self.path
    }

    /// Replace the search page the list is edited against.
    pub fn set_search_results(&mut self, results: SearchResults) {
        self.results = results;
    }

    /// Books on the current page that are not yet in the list.
    #[must_use]
    pub fn not_yet_in_list(&self) -> Vec<&SearchResultBook> {
        not_yet_in_list(&self.results.books, &self.entries, &self.path)
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e.identifier == identifier)
    }

    /// Prepend the search result with `identifier` to the list.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, identifier: &str) -> bool {
        self.drag = DragState::Idle;

        if self.contains(identifier) {
            tracing::debug!(identifier, "add skipped: already in list");
            return false;
        }
        let Some(book) = self.results.find(identifier, &self.path) else {
            tracing::debug!(identifier, "add skipped: not in search results");
            return false;
        };

        let entry = book.to_entry(identifier);
        self.entries.insert(0, entry);
        true
    }

    /// Drop the entry with `identifier`. Returns whether the list changed.
    pub fn remove(&mut self, identifier: &str) -> bool {
        self.drag = DragState::Idle;

        let before = self.entries.len();
        self.entries.retain(|e| e.identifier != identifier);
        let removed = self.entries.len() != before;
        if !removed {
            tracing::debug!(identifier, "remove skipped: not in list");
        }
        removed
    }

    /// Prepend every book not yet in the list, keeping page order.
    ///
    /// Returns how many entries were added.
    pub fn add_all(&mut self) -> usize {
        self.drag = DragState::Idle;

        let mut added: Vec<ListEntry> = Vec::new();
        for book in not_yet_in_list(&self.results.books, &self.entries, &self.path) {
            if let Some(identifier) = book.identifier(&self.path) {
                if !added.iter().any(|e| e.identifier == identifier) {
                    added.push(book.to_entry(identifier));
                }
            }
        }

        let count = added.len();
        added.append(&mut self.entries);
        self.entries = added;
        count
    }

    /// Empty the list. Returns how many entries were removed.
    pub fn remove_all(&mut self) -> usize {
        self.drag = DragState::Idle;
        std::mem::take(&mut self.entries).len()
    }

    pub fn begin_drag(&mut self, source: Droppable) {
        self.drag = DragState::DraggingFrom(source);
    }

    /// Finish a drag of `identifier` from `source` onto `destination`.
    ///
    /// Results dropped on the entries panel are added; entries dropped on the
    /// results panel are removed. Any other outcome, including a drop outside
    /// both panels (`destination = None`), leaves the list alone. The drag
    /// state is idle afterwards in every case.
    pub fn end_drag(
        &mut self,
        identifier: &str,
        source: Droppable,
        destination: Option<Droppable>,
    ) -> bool {
        let changed = match (source, destination) {
            (Droppable::SearchResults, Some(Droppable::ListEntries)) => self.add(identifier),
            (Droppable::ListEntries, Some(Droppable::SearchResults)) => self.remove(identifier),
            _ => false,
        };
        self.drag = DragState::Idle;
        changed
    }

    /// Whether `panel` currently accepts a drop.
    #[must_use]
    pub fn accepts_drop(&self, panel: Droppable) -> bool {
        self.drag.accepts_drop(panel)
    }

    /// Adopt a new canonical entry list, e.g. after switching lists or saving.
    pub fn reset(&mut self, entries: Vec<ListEntry>) {
        self.baseline.clone_from(&entries);
        self.entries = entries;
        self.drag = DragState::Idle;
    }

    /// Throw away working changes and return to the baseline.
    pub fn cancel(&mut self) {
        self.entries.clone_from(&self.baseline);
        self.drag = DragState::Idle;
    }

    /// Whether the working entries hold different identifiers than the baseline.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        entries_changed(&self.baseline, &self.entries)
    }

    /// URL of the next search page to request, unless one is already in flight.
    ///
    /// `is_fetching` is owned by the paging collaborator.
    #[must_use]
    pub fn next_page_to_load(&self, is_fetching: bool) -> Option<&str> {
        if is_fetching {
            return None;
        }
        self.results.next_page_url.as_deref()
    }
}
