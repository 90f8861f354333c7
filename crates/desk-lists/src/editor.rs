//! Editing session for one custom list: name, entries, collections, search.

use desk_core::entities::{CollectionRef, CustomListDetails, IdentifierPath, ListEntry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::changes::collections_changed;
use crate::reconciler::ListReconciler;

/// Entry point that searches the whole catalog.
pub const ALL_ENTRY_POINTS: &str = "all";

/// What the save layer sends to the server for a list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListSavePayload {
    /// `None` when the list is being created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub entries: Vec<ListEntry>,
    pub collections: Vec<i64>,
}

/// The right-hand panel of the lists page: one list being created or edited.
#[derive(Debug, Clone)]
pub struct ListEditor {
    library: String,
    list: Option<CustomListDetails>,
    name: String,
    collections: Vec<CollectionRef>,
    entry_point: String,
    entries: ListReconciler,
}

impl ListEditor {
    /// Open `list` for editing in `library`. `None` starts a new list.
    #[must_use]
    pub fn new(
        library: impl Into<String>,
        list: Option<CustomListDetails>,
        path: IdentifierPath,
    ) -> Self {
        let (name, entries, collections) = Self::working_copy(list.as_ref());
        Self {
            library: library.into(),
            list,
            name,
            collections,
            entry_point: ALL_ENTRY_POINTS.to_string(),
            entries: ListReconciler::new(entries, path),
        }
    }

    fn working_copy(list: Option<&CustomListDetails>) -> (String, Vec<ListEntry>, Vec<CollectionRef>) {
        list.map_or_else(Default::default, |list| {
            (
                list.name.clone(),
                list.entries.clone(),
                list.collections.clone().unwrap_or_default(),
            )
        })
    }

    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    #[must_use]
    pub const fn list(&self) -> Option<&CustomListDetails> {
        self.list.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn collections(&self) -> &[CollectionRef] {
        &self.collections
    }

    #[must_use]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    #[must_use]
    pub const fn entries(&self) -> &ListReconciler {
        &self.entries
    }

    pub const fn entries_mut(&mut self) -> &mut ListReconciler {
        &mut self.entries
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn has_collection(&self, id: i64) -> bool {
        self.collections.iter().any(|c| c.id == id)
    }

    /// Select `collection` if it is not selected, otherwise deselect it.
    pub fn toggle_collection(&mut self, collection: CollectionRef) {
        if self.has_collection(collection.id) {
            self.collections.retain(|c| c.id != collection.id);
        } else {
            self.collections.push(collection);
        }
    }

    pub fn select_entry_point(&mut self, entry_point: impl Into<String>) {
        self.entry_point = entry_point.into();
    }

    /// Take in a freshly loaded version of the list (or its absence).
    ///
    /// A different list replaces the whole session. The same list refreshes
    /// the baseline and the entries; its collections are adopted only when
    /// they were not known before.
    pub fn replace_list(&mut self, list: Option<CustomListDetails>) {
        let same_list = match (&self.list, &list) {
            (Some(current), Some(next)) => current.id == next.id,
            (None, None) => true,
            _ => false,
        };

        if !same_list {
            tracing::debug!(
                from = ?self.list.as_ref().map(|l| l.id),
                to = ?list.as_ref().map(|l| l.id),
                "switching edited list"
            );
            let (name, entries, collections) = Self::working_copy(list.as_ref());
            self.name = name;
            self.collections = collections;
            self.entry_point = ALL_ENTRY_POINTS.to_string();
            self.entries.reset(entries);
            self.list = list;
            return;
        }

        let Some(next) = list else {
            return;
        };
        let had_collections = self.list.as_ref().is_some_and(|l| l.collections.is_some());
        if !had_collections {
            if let Some(collections) = &next.collections {
                self.collections.clone_from(collections);
            }
        }
        self.entries.reset(next.entries.clone());
        self.list = Some(next);
    }

    fn baseline_collections(&self) -> &[CollectionRef] {
        self.list
            .as_ref()
            .and_then(|l| l.collections.as_deref())
            .unwrap_or_default()
    }

    /// Whether anything differs from the loaded list.
    ///
    /// A new list's name never counts as a change on its own.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let name_changed = self.list.as_ref().is_some_and(|l| l.name != self.name);
        name_changed
            || self.entries.has_changes()
            || collections_changed(self.baseline_collections(), &self.collections)
    }

    /// Discard all working changes.
    pub fn cancel(&mut self) {
        if let Some(list) = &self.list {
            self.name.clone_from(&list.name);
        }
        self.collections = self.baseline_collections().to_vec();
        self.entry_point = ALL_ENTRY_POINTS.to_string();
        self.entries.cancel();
    }

    /// Search URL for `terms` in the current library and entry point.
    #[must_use]
    pub fn search_url(&self, terms: &str) -> String {
        let mut url = format!(
            "/{}/search?q={}",
            self.library,
            urlencoding::encode(terms)
        );
        if !self.entry_point.is_empty() && self.entry_point != ALL_ENTRY_POINTS {
            url.push_str("&entrypoint=");
            url.push_str(&urlencoding::encode(&self.entry_point));
        }
        url
    }

    /// Path of the list's crawlable feed.
    #[must_use]
    pub fn crawlable_feed_path(&self) -> String {
        let name = self.list.as_ref().map_or("", |l| l.name.as_str());
        format!("{}/lists/{name}/crawlable", self.library)
    }

    #[must_use]
    pub fn save_payload(&self) -> ListSavePayload {
        ListSavePayload {
            id: self.list.as_ref().map(|l| l.id),
            name: self.name.clone(),
            entries: self.entries.entries().to_vec(),
            collections: self.collections.iter().map(|c| c.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collection(id: i64) -> CollectionRef {
        CollectionRef {
            id,
            name: format!("collection {id}"),
            protocol: "protocol".into(),
        }
    }

    fn list() -> CustomListDetails {
        CustomListDetails {
            id: 1,
            name: "list".into(),
            entries: vec![
                ListEntry::new("1", "title 1", vec!["author 1".into()]),
                ListEntry::new("2", "title 2", vec!["author 2a".into(), "author 2b".into()]),
            ],
            collections: Some(vec![collection(2)]),
        }
    }

    fn editor() -> ListEditor {
        ListEditor::new("library", Some(list()), IdentifierPath::default())
    }

    #[test]
    fn opens_with_list_state() {
        let editor = editor();
        assert_eq!(editor.name(), "list");
        assert_eq!(editor.entries().entries().len(), 2);
        assert!(editor.has_collection(2));
        assert!(!editor.has_collection(1));
        assert_eq!(editor.entry_point(), "all");
        assert!(!editor.has_changes());
    }

    #[test]
    fn search_url_encodes_terms() {
        let editor = editor();
        assert_eq!(editor.search_url("test"), "/library/search?q=test");
        assert_eq!(
            editor.search_url("war & peace"),
            "/library/search?q=war%20%26%20peace"
        );
    }

    #[test]
    fn search_url_adds_entry_point() {
        let mut editor = editor();
        editor.select_entry_point("Audio Books");
        assert_eq!(
            editor.search_url("test"),
            "/library/search?q=test&entrypoint=Audio%20Books"
        );
    }

    #[test]
    fn renaming_is_a_change_for_saved_lists_only() {
        let mut saved = editor();
        saved.rename("renamed");
        assert!(saved.has_changes());

        let mut fresh = ListEditor::new("library", None, IdentifierPath::default());
        fresh.rename("new list");
        assert!(!fresh.has_changes());
    }

    #[test]
    fn toggling_collections_is_tracked() {
        let mut editor = editor();
        editor.toggle_collection(collection(1));
        assert!(editor.has_collection(1));
        assert!(editor.has_changes());

        editor.toggle_collection(collection(1));
        assert!(!editor.has_collection(1));
        assert!(!editor.has_changes());
    }

    #[test]
    fn cancel_restores_everything() {
        let mut editor = editor();
        editor.rename("renamed");
        editor.toggle_collection(collection(3));
        editor.select_entry_point("Book");
        editor.entries_mut().remove_all();
        assert!(editor.has_changes());

        editor.cancel();
        assert_eq!(editor.name(), "list");
        assert_eq!(editor.collections(), &[collection(2)]);
        assert_eq!(editor.entry_point(), "all");
        assert_eq!(editor.entries().entries().len(), 2);
        assert!(!editor.has_changes());
    }

    #[test]
    fn save_payload_carries_ids() {
        let payload = editor().save_payload();
        assert_eq!(payload.id, Some(1));
        assert_eq!(payload.name, "list");
        assert_eq!(payload.collections, vec![2]);
        assert_eq!(payload.entries.len(), 2);
    }

    #[test]
    fn new_list_payload_omits_id() {
        let mut editor = ListEditor::new("library", None, IdentifierPath::default());
        editor.rename("fresh");
        let json = serde_json::to_value(editor.save_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "fresh", "entries": [], "collections": [] })
        );
    }

    #[test]
    fn crawlable_feed_path_uses_saved_name() {
        assert_eq!(editor().crawlable_feed_path(), "library/lists/list/crawlable");
    }

    #[test]
    fn switching_lists_resets_session() {
        let mut editor = editor();
        editor.rename("renamed");
        editor.entries_mut().remove_all();

        let other = CustomListDetails {
            id: 7,
            name: "other".into(),
            entries: vec![ListEntry::new("9", "title 9", vec![])],
            collections: None,
        };
        editor.replace_list(Some(other));

        assert_eq!(editor.name(), "other");
        assert!(editor.collections().is_empty());
        assert_eq!(editor.entries().entries().len(), 1);
        assert!(!editor.has_changes());
    }

    #[test]
    fn late_collections_are_adopted_for_same_list() {
        let mut without = list();
        without.collections = None;
        let mut editor = ListEditor::new("library", Some(without), IdentifierPath::default());
        editor.rename("renamed");
        assert!(editor.collections().is_empty());

        editor.replace_list(Some(list()));
        assert_eq!(editor.collections(), &[collection(2)]);
        assert_eq!(editor.name(), "renamed");
    }

    #[test]
    fn closing_the_list_resets_to_new() {
        let mut editor = editor();
        editor.replace_list(None);
        assert!(editor.list().is_none());
        assert_eq!(editor.name(), "");
        assert!(editor.entries().entries().is_empty());
    }
}
