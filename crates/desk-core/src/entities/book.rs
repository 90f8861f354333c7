use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ListEntry;

const DEFAULT_IDENTIFIER_FIELD: &str = "simplified:pwid";
const DEFAULT_IDENTIFIER_VALUE_KEY: &str = "_";

/// Where a search-result book keeps its identifier inside its raw feed entry.
///
/// The identifier is read from `raw[field][0][value_key]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdentifierPath {
    pub field: String,
    pub value_key: String,
}

impl IdentifierPath {
    #[must_use]
    pub fn new(field: impl Into<String>, value_key: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value_key: value_key.into(),
        }
    }

    /// Read the identifier out of a raw feed entry, if it is present and a string.
    #[must_use]
    pub fn extract<'a>(&self, raw: &'a Value) -> Option<&'a str> {
        raw.get(self.field.as_str())?
            .get(0)?
            .get(self.value_key.as_str())?
            .as_str()
    }
}

impl Default for IdentifierPath {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER_FIELD, DEFAULT_IDENTIFIER_VALUE_KEY)
    }
}

/// A book returned by a catalog search.
///
/// `raw` is the opaque feed entry; only the identifier is ever read from it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResultBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub raw: Value,
}

impl SearchResultBook {
    #[must_use]
    pub fn identifier<'a>(&'a self, path: &IdentifierPath) -> Option<&'a str> {
        path.extract(&self.raw)
    }

    /// Build the list entry this book becomes when added to a list.
    #[must_use]
    pub fn to_entry(&self, identifier: &str) -> ListEntry {
        ListEntry::new(identifier, self.title.clone(), self.authors.clone())
    }
}

/// One page of search results, as delivered by the paging collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResults {
    #[serde(default)]
    pub books: Vec<SearchResultBook>,
    #[serde(default)]
    pub next_page_url: Option<String>,
}

impl SearchResults {
    /// Find the first book whose identifier equals `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str, path: &IdentifierPath) -> Option<&SearchResultBook> {
        self.books
            .iter()
            .find(|book| book.identifier(path) == Some(identifier))
    }
}
