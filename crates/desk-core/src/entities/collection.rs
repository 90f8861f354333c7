use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ListEntry;

/// A collection that can feed new books into a custom list. Compared by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub protocol: String,
}

/// The canonical state of a saved custom list, as loaded from the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CustomListDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<ListEntry>,
    /// `None` until the server has reported the list's collections.
    #[serde(default)]
    pub collections: Option<Vec<CollectionRef>>,
}
