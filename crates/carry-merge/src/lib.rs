//! Resource reconciliation engine for skill map carryover.
//!
//! Merges two resource manifests when a learner's project moves from one
//! activity to the next. One side (the winner) is authoritative; the other
//! (the loser) is folded in additively:
//!
//! 1. [`index_winner`] -- record occupied keys, display names, and content
//!    fingerprints of the winner.
//! 2. [`fold_loser`] -- drop loser entries whose content already exists,
//!    allocate fresh keys and names for the rest, and collect tile renames.
//! 3. [`fix_tile_references`] -- rewrite carried tilemaps' tilesets through
//!    the rename map.
//!
//! [`reconcile_manifests`] runs the pipeline over decoded manifests and
//! [`reconcile`] over manifest text, including the absent-side identities.
//! The engine is pure: inputs are never mutated and the same inputs always
//! produce the same output.

pub mod allocator;
pub mod engine;
pub mod error;
pub mod fixup;
pub mod fold;
pub mod index;
pub mod report;

pub use allocator::{IdAllocator, NameAllocator};
pub use engine::{reconcile, reconcile_manifests, MergedText, Reconciliation};
pub use error::{MergeError, MergeResult, Side};
pub use fixup::fix_tile_references;
pub use fold::{fold_loser, FoldOutcome, TileRenames};
pub use index::{index_winner, WinnerIndex};
pub use report::{DroppedDuplicate, NameAssignment, ReconcileReport, Rekeyed};
