//! Per-field merge of two projects.

use std::collections::BTreeMap;

use carry_merge::{reconcile, ReconcileReport};
use carry_store::Project;
use tracing::info;

use crate::config::CarryoverConfig;
use crate::error::{CarryoverError, CarryoverResult};

/// A merged project and, per reconciled manifest field, what the merge did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectMerge {
    pub project: Project,
    pub reports: BTreeMap<String, ReconcileReport>,
}

/// Merge `previous` into `current`.
///
/// The result starts as a copy of `current`. With `carry_forward` the
/// previous project is the winner, otherwise `current` is:
///
/// - source fields take the winner's text, and are removed if the winner has
///   none;
/// - manifest fields are reconciled with the other project's manifest folded
///   into the winner's.
///
/// The merged project keeps `current`'s header id. Nothing is written until
/// every field has merged.
pub fn merge_project_fields(
    previous: &Project,
    current: &Project,
    carry_forward: bool,
    config: &CarryoverConfig,
) -> CarryoverResult<ProjectMerge> {
    let (winner, loser) = if carry_forward {
        (previous, current)
    } else {
        (current, previous)
    };

    let mut merged = current.clone();
    let mut reports = BTreeMap::new();

    for field in &config.source_fields {
        match winner.field(field) {
            Some(text) => {
                merged.set_field(field.as_str(), text);
            }
            None => {
                merged.remove_field(field);
            }
        }
    }

    for field in &config.manifest_fields {
        let result = reconcile(loser.field(field), winner.field(field), &config.conventions)
            .map_err(|source| CarryoverError::Merge {
                field: field.clone(),
                source,
            })?;
        if result.report.examined() > 0 {
            info!(
                field = %field,
                kept = result.report.kept.len(),
                dropped = result.report.dropped.len(),
                rekeyed = result.report.rekeyed.len(),
                renamed = result.report.named.len(),
                rewritten_refs = result.report.rewritten_refs,
                "reconciled manifest"
            );
        }
        reports.insert(field.clone(), result.report);
        match result.text {
            Some(text) => {
                merged.set_field(field.as_str(), text);
            }
            None => {
                merged.remove_field(field);
            }
        }
    }

    Ok(ProjectMerge {
        project: merged,
        reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const IMAGES: &str = "images.g.jres";
    const TILEMAPS: &str = "tilemap.g.jres";

    fn previous() -> Project {
        Project::new("prev")
            .with_field("main.ts", "learner code")
            .with_field("main.blocks", "<xml>learner</xml>")
            .with_field("pxt.json", r#"{"name":"old"}"#)
            .with_field(IMAGES, json!({ "*": { "mimeType": "image/x-mkcd-f4" }, "mine": "MINE" }).to_string())
    }

    fn current() -> Project {
        Project::new("cur")
            .with_field("main.ts", "template code")
            .with_field("main.py", "template python")
            .with_field("main.blocks", "<xml>template</xml>")
            .with_field("pxt.json", r#"{"name":"new"}"#)
            .with_field(IMAGES, json!({ "*": { "mimeType": "image/x-mkcd-f4" }, "theirs": "THEIRS" }).to_string())
    }

    fn manifest(project: &Project, field: &str) -> Value {
        serde_json::from_str(project.field(field).unwrap()).unwrap()
    }

    fn data_of(entry: &Value) -> &str {
        entry
            .as_str()
            .or_else(|| entry["data"].as_str())
            .unwrap_or_default()
    }

    #[test]
    fn carry_forward_takes_previous_sources() {
        let merged =
            merge_project_fields(&previous(), &current(), true, &CarryoverConfig::default())
                .unwrap()
                .project;
        assert_eq!(merged.header_id, "cur");
        assert_eq!(merged.field("main.ts"), Some("learner code"));
        assert_eq!(merged.field("main.blocks"), Some("<xml>learner</xml>"));
        assert!(merged.field("main.py").is_none());
    }

    #[test]
    fn reset_keeps_template_sources() {
        let merged =
            merge_project_fields(&previous(), &current(), false, &CarryoverConfig::default())
                .unwrap()
                .project;
        assert_eq!(merged.field("main.ts"), Some("template code"));
        assert_eq!(merged.field("main.py"), Some("template python"));
    }

    #[test]
    fn other_fields_come_from_current_template() {
        for carry_forward in [true, false] {
            let merged = merge_project_fields(
                &previous(),
                &current(),
                carry_forward,
                &CarryoverConfig::default(),
            )
            .unwrap()
            .project;
            assert_eq!(merged.field("pxt.json"), Some(r#"{"name":"new"}"#));
        }
    }

    #[test]
    fn manifests_are_reconciled_in_both_directions() {
        for carry_forward in [true, false] {
            let merged = merge_project_fields(
                &previous(),
                &current(),
                carry_forward,
                &CarryoverConfig::default(),
            )
            .unwrap()
            .project;
            let images = manifest(&merged, IMAGES);
            assert_eq!(data_of(&images["mine"]), "MINE");
            assert_eq!(data_of(&images["theirs"]), "THEIRS");
        }
    }

    #[test]
    fn winner_manifest_entries_stay_verbatim() {
        let merged =
            merge_project_fields(&previous(), &current(), true, &CarryoverConfig::default())
                .unwrap()
                .project;
        let images = manifest(&merged, IMAGES);
        assert_eq!(images["mine"], json!("MINE"));
        assert!(images["theirs"].is_object());
    }

    #[test]
    fn manifest_present_on_one_side_is_copied() {
        let prev = previous().with_field(TILEMAPS, r#"{"*":{"mimeType":"image/x-mkcd-f4"}}"#);
        let merged =
            merge_project_fields(&prev, &current(), false, &CarryoverConfig::default())
                .unwrap()
                .project;
        assert_eq!(
            merged.field(TILEMAPS),
            Some(r#"{"*":{"mimeType":"image/x-mkcd-f4"}}"#)
        );
    }

    #[test]
    fn reports_cover_each_manifest_field() {
        let merge =
            merge_project_fields(&previous(), &current(), true, &CarryoverConfig::default())
                .unwrap();
        assert_eq!(
            merge.reports.keys().collect::<Vec<_>>(),
            vec![IMAGES, TILEMAPS]
        );
        assert_eq!(merge.reports[IMAGES].kept, vec!["theirs".to_string()]);
        assert!(merge.reports[TILEMAPS].is_noop());
    }

    #[test]
    fn malformed_manifest_names_the_field() {
        let prev = previous().with_field(IMAGES, "{ broken");
        let err = merge_project_fields(&prev, &current(), true, &CarryoverConfig::default())
            .unwrap_err();
        assert!(matches!(err, CarryoverError::Merge { ref field, .. } if field == IMAGES));
    }
}
