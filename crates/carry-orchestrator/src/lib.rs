//! Carryover orchestration for skill maps.
//!
//! When a learner starts an activity, [`Carryover`] finds the most recent
//! completed predecessor activity, loads both projects, merges them field by
//! field, and saves the result over the new activity's project.
//!
//! - Source files are winner-takes-all.
//! - Resource manifests are reconciled by [`carry_merge`].
//! - Every other field comes from the new activity's template.
//!
//! With `carry_forward` the learner's previous work wins; without it the new
//! template wins and the previous assets are only folded in.

pub mod carryover;
pub mod config;
pub mod error;
pub mod fields;
pub mod lookup;
pub mod progress;

pub use carryover::{Carryover, CarryoverOutcome, CarryoverRequest, SkipReason};
pub use config::CarryoverConfig;
pub use error::{CarryoverError, CarryoverResult};
pub use fields::{merge_project_fields, ProjectMerge};
pub use lookup::{PredecessorChain, PreviousActivityLookup};
pub use progress::{ActivityState, MapProgress, UserProgress};
