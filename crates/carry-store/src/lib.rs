//! Project storage for skill map carryover.
//!
//! A project is the set of text files an activity's editor session works on
//! (source files, resource manifests, configuration), keyed by field name and
//! identified by the header id the learner's progress points at.
//!
//! # Storage Backends
//!
//! All backends implement the async [`ProjectStore`] trait:
//!
//! - [`InMemoryProjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Loads never mutate stored state.
//! 2. A save replaces the whole project; there are no partial writes.
//! 3. All backend failures are propagated as [`StoreError`], never swallowed.

pub mod error;
pub mod memory;
pub mod project;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryProjectStore;
pub use project::Project;
pub use traits::ProjectStore;
