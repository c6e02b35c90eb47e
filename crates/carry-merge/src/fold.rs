//! Pass 2: fold the loser into the winner's index.
//!
//! Each loser entry is either a duplicate of content already present (and
//! dropped) or new content that gets a free key and a unique display name.
//! Duplicate detection always runs first, so identical content is dropped
//! even when its key and name would not collide.
//!
//! Tiles that are dropped or moved leave a rename behind, keyed by the
//! loser-side tile reference. Tilemaps are held back from the output because
//! their tilesets may still point at loser-side keys.

use std::collections::BTreeMap;

use carry_manifest::{AssetConventions, AssetRecord, ResourceEntry, ResourceManifest};
use tracing::warn;

use crate::index::WinnerIndex;
use crate::report::{DroppedDuplicate, NameAssignment, ReconcileReport, Rekeyed};

/// Mapping from stale loser-side tile references to their output references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileRenames {
    renames: BTreeMap<String, String>,
}

impl TileRenames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: String, to: String) {
        self.renames.insert(from, to);
    }

    /// Map a reference through the renames; unmapped references are returned
    /// unchanged.
    pub fn resolve<'a>(&'a self, reference: &'a str) -> &'a str {
        self.renames
            .get(reference)
            .map(String::as_str)
            .unwrap_or(reference)
    }

    pub fn get(&self, reference: &str) -> Option<&str> {
        self.renames.get(reference).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

/// Everything pass 2 produces.
#[derive(Clone, Debug, Default)]
pub struct FoldOutcome {
    /// Kept non-tilemap entries under their resolved keys.
    pub kept: Vec<(String, ResourceEntry)>,
    /// Kept tilemaps under their resolved keys, tilesets not yet fixed up.
    pub held_tilemaps: Vec<(String, ResourceEntry)>,
    pub renames: TileRenames,
    pub report: ReconcileReport,
}

/// Fold every loser entry, in key order, against `index`.
///
/// `index` is extended as entries are kept, so later loser entries dedup and
/// allocate against earlier ones too.
pub fn fold_loser(
    loser: &ResourceManifest,
    index: &mut WinnerIndex,
    conventions: &AssetConventions,
) -> FoldOutcome {
    let mut outcome = FoldOutcome::default();
    let default_mime = loser.default_mime();

    for (key, entry) in loser.entries() {
        let fingerprint = entry.fingerprint(default_mime);

        if let Some(existing) = index.find(&fingerprint) {
            if entry.is_tile() {
                outcome
                    .renames
                    .insert(conventions.tile_ref(key), conventions.tile_ref(existing));
            }
            outcome.report.dropped.push(DroppedDuplicate {
                key: key.clone(),
                matched: existing.to_string(),
            });
            continue;
        }

        let mime = entry.mime_type(default_mime);
        let own_name = entry.display_name();
        let candidate = own_name
            .map(str::to_string)
            .or_else(|| conventions.synthesized_name(mime, entry.is_tile()));
        let display_name = candidate.map(|c| index.names.reserve(&c));

        let resolved = index.ids.reserve(key);
        if resolved != *key {
            if entry.is_tile() {
                outcome
                    .renames
                    .insert(conventions.tile_ref(key), conventions.tile_ref(&resolved));
            }
            outcome.report.rekeyed.push(Rekeyed {
                from: key.clone(),
                to: resolved.clone(),
            });
        }

        match &display_name {
            Some(name) if own_name != Some(name.as_str()) => {
                outcome.report.named.push(NameAssignment {
                    key: resolved.clone(),
                    previous: own_name.map(str::to_string),
                    assigned: name.clone(),
                });
            }
            Some(_) => {}
            None => {
                warn!(key = %resolved, mime, "no naming convention for asset kind; left unnamed");
                outcome.report.unnamed.push(resolved.clone());
            }
        }

        index.fingerprints.insert(fingerprint, resolved.clone());

        let output = emit_entry(entry, mime, display_name, &resolved, conventions);
        outcome.report.kept.push(resolved.clone());
        if output.is_tilemap() {
            outcome.held_tilemaps.push((resolved, output));
        } else {
            outcome.kept.push((resolved, output));
        }
    }

    outcome
}

/// Build the output entry from the loser's object, overwriting only
/// `displayName` (when one was assigned) and `mimeType`. A non-empty string
/// `id` follows the key. Plain entries become objects with explicit `data`.
fn emit_entry(
    entry: &ResourceEntry,
    mime: &str,
    display_name: Option<String>,
    resolved: &str,
    conventions: &AssetConventions,
) -> ResourceEntry {
    let mut record = match entry {
        ResourceEntry::Plain(data) => AssetRecord::with_data(data.as_str()),
        ResourceEntry::Rich(record) | ResourceEntry::Tilemap(record) => record.clone(),
    };
    if let Some(name) = display_name {
        record.set_display_name(name);
    }
    record.set_mime_type(mime);
    if record.id().is_some_and(|id| !id.is_empty()) {
        record.set_id(resolved);
    }

    if conventions.is_tilemap(mime) {
        ResourceEntry::Tilemap(record)
    } else {
        ResourceEntry::Rich(record)
    }
}
