//! Lookup of the activities that precede a given activity.
//!
//! Building the activity graph from a skill map definition happens elsewhere;
//! the orchestrator only needs, for one activity, the states of the
//! activities before it.

use std::collections::HashMap;

use crate::progress::{ActivityState, UserProgress};

/// Read-only lookup of previous activity states.
pub trait PreviousActivityLookup: Send + Sync {
    /// States of the activities preceding `activity_id`, most recent first.
    ///
    /// Predecessors the learner has no state for are omitted.
    fn previous_activity_states(
        &self,
        progress: &UserProgress,
        page_source: &str,
        map_id: &str,
        activity_id: &str,
    ) -> Vec<ActivityState>;
}

/// Explicit predecessor lists per map and activity.
#[derive(Clone, Debug, Default)]
pub struct PredecessorChain {
    predecessors: HashMap<String, HashMap<String, Vec<String>>>,
}

impl PredecessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the predecessors of `activity_id`, most recent first.
    pub fn with_predecessors<I, S>(mut self, map_id: &str, activity_id: &str, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors
            .entry(map_id.to_string())
            .or_default()
            .insert(
                activity_id.to_string(),
                predecessors.into_iter().map(Into::into).collect(),
            );
        self
    }

    /// Declare a linear map: each activity's predecessors are all activities
    /// before it, nearest first.
    pub fn linear<I, S>(self, map_id: &str, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = activities.into_iter().map(Into::into).collect();
        order.iter().enumerate().fold(self, |chain, (i, activity)| {
            chain.with_predecessors(map_id, activity, order[..i].iter().rev().cloned())
        })
    }
}

impl PreviousActivityLookup for PredecessorChain {
    fn previous_activity_states(
        &self,
        progress: &UserProgress,
        page_source: &str,
        map_id: &str,
        activity_id: &str,
    ) -> Vec<ActivityState> {
        let Some(previous) = self
            .predecessors
            .get(map_id)
            .and_then(|activities| activities.get(activity_id))
        else {
            return Vec::new();
        };
        previous
            .iter()
            .filter_map(|id| progress.activity(page_source, map_id, id).cloned())
            .collect()
    }
}
