use carry_manifest::AssetConventions;
use serde::{Deserialize, Serialize};

use crate::error::CarryoverResult;

/// Which project fields are merged, and how.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarryoverConfig {
    /// Source files copied whole from the winning project.
    pub source_fields: Vec<String>,
    /// Resource manifests reconciled entry by entry.
    pub manifest_fields: Vec<String>,
    /// MIME kinds and naming rules used while reconciling manifests.
    pub conventions: AssetConventions,
}

impl Default for CarryoverConfig {
    fn default() -> Self {
        Self {
            source_fields: vec!["main.ts".into(), "main.py".into(), "main.blocks".into()],
            manifest_fields: vec!["tilemap.g.jres".into(), "images.g.jres".into()],
            conventions: AssetConventions::default(),
        }
    }
}

impl CarryoverConfig {
    /// Parse a TOML document. Keys it leaves out keep their defaults.
    pub fn from_toml_str(text: &str) -> CarryoverResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
