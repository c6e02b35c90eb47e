//! Naming conventions the editor uses for assets.
//!
//! The editor identifies asset kinds by MIME type and refers to tiles from a
//! tilemap's `tileset` through a namespace-qualified reference
//! (`"<tile-namespace>.<key>"`). Assets without a display name are invisible
//! in the editor, so kept assets get a name synthesized from the same
//! namespace/prefix pairs the editor uses when creating new assets.

use serde::{Deserialize, Serialize};

/// MIME kinds and naming rules for manifest assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConventions {
    /// MIME type of images and tiles.
    pub image_mime: String,
    /// MIME type of tilemaps.
    pub tilemap_mime: String,
    /// MIME type of animations.
    pub animation_mime: String,
    /// Namespace under which tiles are referenced from a tileset.
    pub tile_namespace: String,
    pub tile_prefix: String,
    pub images_namespace: String,
    pub image_prefix: String,
    pub animation_namespace: String,
    pub animation_prefix: String,
    /// Display name given to unnamed tilemaps.
    pub tilemap_display_name: String,
}

impl Default for AssetConventions {
    fn default() -> Self {
        Self {
            image_mime: "image/x-mkcd-f4".into(),
            tilemap_mime: "application/mkcd-tilemap".into(),
            animation_mime: "application/mkcd-animation".into(),
            tile_namespace: "myTiles".into(),
            tile_prefix: "tile".into(),
            images_namespace: "myImages".into(),
            image_prefix: "image".into(),
            animation_namespace: "myAnimations".into(),
            animation_prefix: "anim".into(),
            tilemap_display_name: "tilemap".into(),
        }
    }
}

impl AssetConventions {
    /// Returns `true` if `mime` is the tilemap MIME type.
    pub fn is_tilemap(&self, mime: &str) -> bool {
        mime == self.tilemap_mime
    }

    /// The tileset reference for the tile stored under `key`.
    pub fn tile_ref(&self, key: &str) -> String {
        format!("{}.{}", self.tile_namespace, key)
    }

    /// The base display name the editor would give a new asset of this kind.
    ///
    /// Returns `None` for MIME kinds the editor has no convention for.
    pub fn synthesized_name(&self, mime: &str, is_tile: bool) -> Option<String> {
        if mime == self.image_mime {
            Some(if is_tile {
                format!("{}.{}", self.tile_namespace, self.tile_prefix)
            } else {
                format!("{}.{}", self.images_namespace, self.image_prefix)
            })
        } else if mime == self.tilemap_mime {
            Some(self.tilemap_display_name.clone())
        } else if mime == self.animation_mime {
            Some(format!(
                "{}.{}",
                self.animation_namespace, self.animation_prefix
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_ref_is_namespace_qualified() {
        let c = AssetConventions::default();
        assert_eq!(c.tile_ref("tile3"), "myTiles.tile3");
    }

    #[test]
    fn synthesized_names_follow_kind() {
        let c = AssetConventions::default();
        assert_eq!(
            c.synthesized_name("image/x-mkcd-f4", true).as_deref(),
            Some("myTiles.tile")
        );
        assert_eq!(
            c.synthesized_name("image/x-mkcd-f4", false).as_deref(),
            Some("myImages.image")
        );
        assert_eq!(
            c.synthesized_name("application/mkcd-tilemap", false).as_deref(),
            Some("tilemap")
        );
        assert_eq!(
            c.synthesized_name("application/mkcd-animation", false).as_deref(),
            Some("myAnimations.anim")
        );
    }

    #[test]
    fn unknown_mime_has_no_convention() {
        let c = AssetConventions::default();
        assert!(c.synthesized_name("audio/x-song", false).is_none());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let c: AssetConventions =
            serde_json::from_value(serde_json::json!({ "tile_namespace": "tiles" })).unwrap();
        assert_eq!(c.tile_namespace, "tiles");
        assert_eq!(c.tile_prefix, "tile");
        assert!(c.is_tilemap("application/mkcd-tilemap"));
    }
}
