//! Entity structs for the custom list editor.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be exchanged as JSON with the surrounding save/load layer and validated
//! against their generated schemas.

mod book;
mod collection;
mod entry;

pub use book::{IdentifierPath, SearchResultBook, SearchResults};
pub use collection::{CollectionRef, CustomListDetails};
pub use entry::ListEntry;
