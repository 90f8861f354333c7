use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One book in a custom list.
///
/// The identifier is the list's unique key. It travels as `pwid` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListEntry {
    #[serde(rename = "pwid")]
    pub identifier: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl ListEntry {
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            authors,
        }
    }
}
