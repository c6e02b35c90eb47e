//! Reconciliation entry points.

use carry_manifest::{AssetConventions, ResourceManifest};
use tracing::debug;

use crate::error::{MergeError, MergeResult, Side};
use crate::fixup::fix_tile_references;
use crate::fold::fold_loser;
use crate::index::index_winner;
use crate::report::ReconcileReport;

/// A merged manifest and the report of how it was built.
#[derive(Clone, Debug)]
pub struct Reconciliation {
    pub manifest: ResourceManifest,
    pub report: ReconcileReport,
}

/// Fold `loser` into `winner`.
///
/// The output is a copy of `winner` (its `"*"` entry included, untouched)
/// extended with every loser entry whose content was not already present.
pub fn reconcile_manifests(
    loser: &ResourceManifest,
    winner: &ResourceManifest,
    conventions: &AssetConventions,
) -> Reconciliation {
    let mut index = index_winner(winner);
    debug!(
        ids = index.ids.len(),
        names = index.names.len(),
        "indexed winner manifest"
    );

    let fold = fold_loser(loser, &mut index, conventions);
    debug!(
        kept = fold.report.kept.len(),
        dropped = fold.report.dropped.len(),
        rekeyed = fold.report.rekeyed.len(),
        tile_renames = fold.renames.len(),
        "folded loser manifest"
    );

    let (tilemaps, rewritten) = fix_tile_references(fold.held_tilemaps, &fold.renames);
    debug!(tilemaps = tilemaps.len(), rewritten, "fixed up tile references");

    let mut manifest = winner.clone();
    for (key, entry) in fold.kept.into_iter().chain(tilemaps) {
        manifest.insert(key, entry);
    }

    let mut report = fold.report;
    report.rewritten_refs = rewritten;
    Reconciliation { manifest, report }
}

/// Merged manifest text and the report of how it was built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedText {
    /// `None` when both sides were absent.
    pub text: Option<String>,
    /// Empty when one side was absent and nothing was merged.
    pub report: ReconcileReport,
}

/// Reconcile two manifests given as text.
///
/// An absent, empty, or whitespace-only side is the identity: the other side
/// is returned verbatim, without being decoded. Both absent yields no text.
pub fn reconcile(
    loser: Option<&str>,
    winner: Option<&str>,
    conventions: &AssetConventions,
) -> MergeResult<MergedText> {
    let loser = loser.filter(|text| !text.trim().is_empty());
    let winner = winner.filter(|text| !text.trim().is_empty());

    let (loser, winner) = match (loser, winner) {
        (None, winner) => return Ok(verbatim(winner)),
        (Some(loser), None) => return Ok(verbatim(Some(loser))),
        (Some(loser), Some(winner)) => (loser, winner),
    };

    let loser = ResourceManifest::parse(loser, conventions).map_err(|source| MergeError::Decode {
        side: Side::Loser,
        source,
    })?;
    let winner =
        ResourceManifest::parse(winner, conventions).map_err(|source| MergeError::Decode {
            side: Side::Winner,
            source,
        })?;

    let merged = reconcile_manifests(&loser, &winner, conventions);
    let text = merged
        .manifest
        .to_json_string()
        .map_err(MergeError::Encode)?;
    Ok(MergedText {
        text: Some(text),
        report: merged.report,
    })
}

fn verbatim(text: Option<&str>) -> MergedText {
    MergedText {
        text: text.map(str::to_string),
        report: ReconcileReport::new(),
    }
}
