//! Resource manifest model for skill map carryover.
//!
//! A resource manifest is the JSON catalog of embedded assets (images, tiles,
//! tilemaps, animations) attached to a learner's project. This crate decodes
//! that catalog into typed entries once, so the merge engine never probes raw
//! JSON fields.
//!
//! # Key Types
//!
//! - [`ResourceManifest`] -- keyed catalog plus the reserved `"*"` defaults entry
//! - [`ResourceEntry`] -- one asset: plain string, rich asset, or tilemap
//! - [`AssetRecord`] -- the JSON object behind an object-shaped entry, read leniently
//! - [`Fingerprint`] -- `(mimeType, isTile, data)` content identity
//! - [`AssetConventions`] -- MIME kinds and namespace/prefix naming rules

pub mod conventions;
pub mod entry;
pub mod error;
pub mod manifest;

pub use conventions::AssetConventions;
pub use entry::{AssetRecord, Fingerprint, ResourceEntry};
pub use error::{ManifestError, ManifestResult};
pub use manifest::{ManifestDefaults, ResourceManifest, DEFAULTS_KEY};
