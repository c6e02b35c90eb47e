//! Learner progress as recorded by the skill map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// State of one activity for one learner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityState {
    /// Project the activity's editor session is stored under, once created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_id: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub current_step: u32,
    #[serde(default)]
    pub max_steps: u32,
}

impl ActivityState {
    /// Completed and on its last step: eligible as a carryover source.
    pub fn is_finished(&self) -> bool {
        self.is_completed && self.current_step == self.max_steps
    }
}

/// Progress through one map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapProgress {
    #[serde(default)]
    pub activity_state: BTreeMap<String, ActivityState>,
}

/// Progress through every map, grouped by the page the maps came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Page source to map id to progress.
    #[serde(default)]
    pub map_progress: BTreeMap<String, BTreeMap<String, MapProgress>>,
}

impl UserProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of an activity, if the learner has any.
    pub fn activity(
        &self,
        page_source: &str,
        map_id: &str,
        activity_id: &str,
    ) -> Option<&ActivityState> {
        self.map_progress
            .get(page_source)?
            .get(map_id)?
            .activity_state
            .get(activity_id)
    }

    /// Record the state of an activity, creating page and map entries as needed.
    pub fn set_activity(
        &mut self,
        page_source: &str,
        map_id: &str,
        activity_id: &str,
        state: ActivityState,
    ) {
        self.map_progress
            .entry(page_source.to_string())
            .or_default()
            .entry(map_id.to_string())
            .or_default()
            .activity_state
            .insert(activity_id.to_string(), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finished_requires_completion_and_last_step() {
        let mut state = ActivityState {
            header_id: Some("h".into()),
            is_completed: true,
            current_step: 3,
            max_steps: 3,
        };
        assert!(state.is_finished());
        state.current_step = 2;
        assert!(!state.is_finished());
        state.current_step = 3;
        state.is_completed = false;
        assert!(!state.is_finished());
    }

    #[test]
    fn missing_steps_default_to_zero() {
        let state: ActivityState =
            serde_json::from_value(json!({ "headerId": "h", "isCompleted": true })).unwrap();
        assert!(state.is_finished());
    }

    #[test]
    fn activity_lookup_walks_page_and_map() {
        let mut progress = UserProgress::new();
        progress.set_activity("page", "map", "a1", ActivityState::default());
        assert!(progress.activity("page", "map", "a1").is_some());
        assert!(progress.activity("page", "map", "a2").is_none());
        assert!(progress.activity("other", "map", "a1").is_none());
    }

    #[test]
    fn deserializes_editor_shape() {
        let progress: UserProgress = serde_json::from_value(json!({
            "mapProgress": {
                "https://example.test/skills": {
                    "space": {
                        "activityState": {
                            "intro": { "headerId": "h1", "isCompleted": true, "currentStep": 4, "maxSteps": 4 }
                        }
                    }
                }
            }
        }))
        .unwrap();
        let state = progress
            .activity("https://example.test/skills", "space", "intro")
            .unwrap();
        assert_eq!(state.header_id.as_deref(), Some("h1"));
        assert!(state.is_finished());
    }
}
