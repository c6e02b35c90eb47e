//! Pass 1: index the winner.
//!
//! Every winner key and non-empty display name is marked occupied, and every
//! entry's fingerprint is mapped to its key so identical loser content can be
//! recognised as a duplicate.

use std::collections::HashMap;

use carry_manifest::{Fingerprint, ResourceManifest};

use crate::allocator::{IdAllocator, NameAllocator};

/// Occupancy and content index built from the winner, then extended while
/// folding the loser.
#[derive(Clone, Debug, Default)]
pub struct WinnerIndex {
    pub ids: IdAllocator,
    pub names: NameAllocator,
    /// Fingerprint to the output key already holding that content.
    pub fingerprints: HashMap<Fingerprint, String>,
}

impl WinnerIndex {
    /// Output key of an entry with this content, if one exists.
    pub fn find(&self, fingerprint: &Fingerprint) -> Option<&str> {
        self.fingerprints.get(fingerprint).map(String::as_str)
    }
}

/// Build the index for `winner`.
///
/// If the winner itself holds the same content twice, the first key in key
/// order is the one duplicates resolve to.
pub fn index_winner(winner: &ResourceManifest) -> WinnerIndex {
    let mut index = WinnerIndex::default();
    for (key, entry) in winner.entries() {
        index.ids.occupy(key);
        if let Some(name) = entry.display_name() {
            index.names.occupy(name);
        }
        index
            .fingerprints
            .entry(entry.fingerprint(winner.default_mime()))
            .or_insert_with(|| key.clone());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use carry_manifest::AssetConventions;
    use serde_json::json;

    fn manifest(value: serde_json::Value) -> ResourceManifest {
        ResourceManifest::from_value(value, &AssetConventions::default()).unwrap()
    }

    #[test]
    fn indexes_keys_names_and_fingerprints() {
        let winner = manifest(json!({
            "*": { "mimeType": "image/x-mkcd-f4" },
            "img1": { "data": "AAA", "displayName": "hero" },
            "tile1": { "data": "XYZ", "tilemapTile": true }
        }));
        let index = index_winner(&winner);

        assert!(index.ids.is_occupied("img1"));
        assert!(index.ids.is_occupied("tile1"));
        assert!(!index.ids.is_occupied("*"));
        assert!(index.names.is_occupied("hero"));
        assert_eq!(index.names.len(), 1);

        let tile = winner.get("tile1").unwrap().fingerprint(winner.default_mime());
        assert_eq!(index.find(&tile), Some("tile1"));
    }

    #[test]
    fn first_key_wins_for_duplicate_content() {
        let winner = manifest(json!({ "a": "SAME", "b": "SAME" }));
        let index = index_winner(&winner);
        let fp = winner.get("b").unwrap().fingerprint(winner.default_mime());
        assert_eq!(index.find(&fp), Some("a"));
    }

    #[test]
    fn empty_winner_indexes_nothing() {
        let index = index_winner(&manifest(json!({ "*": { "mimeType": "image/x-mkcd-f4" } })));
        assert!(index.ids.is_empty());
        assert!(index.names.is_empty());
        assert!(index.fingerprints.is_empty());
    }
}
