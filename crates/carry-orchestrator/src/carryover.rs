//! The carryover step run when a learner advances to a new activity.

use std::collections::BTreeMap;

use carry_merge::ReconcileReport;
use carry_store::ProjectStore;
use tracing::{debug, info};

use crate::config::CarryoverConfig;
use crate::error::CarryoverResult;
use crate::fields::merge_project_fields;
use crate::lookup::PreviousActivityLookup;
use crate::progress::{ActivityState, UserProgress};

/// Identifies the activity being carried into.
#[derive(Clone, Copy, Debug)]
pub struct CarryoverRequest<'a> {
    pub progress: &'a UserProgress,
    pub page_source: &'a str,
    pub map_id: &'a str,
    pub activity_id: &'a str,
    /// Keep the learner's previous code (`true`) or reset to the template.
    pub carry_forward: bool,
}

/// Why a carryover did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The activity has no project yet.
    NoCurrentProject,
    /// The nearest finished predecessor has no project, or none is finished.
    NoCompletedPredecessor,
}

/// What a carryover did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarryoverOutcome {
    Merged {
        header_id: String,
        previous_header_id: String,
        /// What reconciliation did, per manifest field.
        reports: BTreeMap<String, ReconcileReport>,
    },
    Skipped(SkipReason),
}

/// Carries a learner's work from a completed activity into the next one.
pub struct Carryover<S, L> {
    store: S,
    lookup: L,
    config: CarryoverConfig,
}

impl<S, L> Carryover<S, L>
where
    S: ProjectStore,
    L: PreviousActivityLookup,
{
    pub fn new(store: S, lookup: L) -> Self {
        Self::with_config(store, lookup, CarryoverConfig::default())
    }

    pub fn with_config(store: S, lookup: L, config: CarryoverConfig) -> Self {
        Self {
            store,
            lookup,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CarryoverConfig {
        &self.config
    }

    /// Run the carryover for one activity.
    ///
    /// Only the nearest finished predecessor is considered; if it has no
    /// project the run is skipped rather than falling back to an older one.
    /// Both projects are loaded concurrently; the merged project is saved only
    /// once every field has merged. A missing or empty header id is a skip,
    /// not an error. Store and manifest failures abort without saving.
    pub async fn run(&self, request: &CarryoverRequest<'_>) -> CarryoverResult<CarryoverOutcome> {
        let Some(header_id) = request
            .progress
            .activity(request.page_source, request.map_id, request.activity_id)
            .and_then(|state| state.header_id.clone())
            .filter(|id| !id.is_empty())
        else {
            debug!(activity = request.activity_id, "no project for activity; skipping carryover");
            return Ok(CarryoverOutcome::Skipped(SkipReason::NoCurrentProject));
        };

        let previous_states = self.lookup.previous_activity_states(
            request.progress,
            request.page_source,
            request.map_id,
            request.activity_id,
        );
        let Some(previous_header_id) = previous_states
            .into_iter()
            .find(ActivityState::is_finished)
            .and_then(|state| state.header_id)
            .filter(|id| !id.is_empty())
        else {
            debug!(activity = request.activity_id, "no completed predecessor; skipping carryover");
            return Ok(CarryoverOutcome::Skipped(SkipReason::NoCompletedPredecessor));
        };

        let (previous, current) = tokio::try_join!(
            self.store.load_project(&previous_header_id),
            self.store.load_project(&header_id),
        )?;

        let merge = merge_project_fields(
            &previous,
            &current,
            request.carry_forward,
            &self.config,
        )?;
        self.store.save_project(&merge.project).await?;

        info!(
            header_id = %header_id,
            previous = %previous_header_id,
            carry_forward = request.carry_forward,
            "carried project over"
        );
        Ok(CarryoverOutcome::Merged {
            header_id,
            previous_header_id,
            reports: merge.reports,
        })
    }
}
