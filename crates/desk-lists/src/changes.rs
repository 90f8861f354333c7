//! Pure comparisons between a working snapshot and its baseline.

use std::collections::HashSet;

use desk_core::entities::{CollectionRef, IdentifierPath, ListEntry, SearchResultBook};

/// Books on the page that are not already list entries, in page order.
///
/// Books without a readable identifier are left out: they can never be added.
#[must_use]
pub fn not_yet_in_list<'a>(
    books: &'a [SearchResultBook],
    entries: &[ListEntry],
    path: &IdentifierPath,
) -> Vec<&'a SearchResultBook> {
    let listed: HashSet<&str> = entries.iter().map(|e| e.identifier.as_str()).collect();
    books
        .iter()
        .filter(|book| {
            book.identifier(path)
                .is_some_and(|identifier| !listed.contains(identifier))
        })
        .collect()
}

/// Whether two entry lists hold different identifiers. Order is ignored.
#[must_use]
pub fn entries_changed(baseline: &[ListEntry], working: &[ListEntry]) -> bool {
    let ids = |entries: &[ListEntry]| -> HashSet<String> {
        entries.iter().map(|e| e.identifier.clone()).collect()
    };
    baseline.len() != working.len() || ids(baseline) != ids(working)
}

/// Whether two collection selections differ by id. Order is ignored.
#[must_use]
pub fn collections_changed(baseline: &[CollectionRef], working: &[CollectionRef]) -> bool {
    let ids = |collections: &[CollectionRef]| -> HashSet<i64> {
        collections.iter().map(|c| c.id).collect()
    };
    baseline.len() != working.len() || ids(baseline) != ids(working)
}
