//! Pass 3: point carried tilemaps at the tiles that survived the fold.

use carry_manifest::ResourceEntry;
use serde_json::Value;

use crate::fold::TileRenames;

/// Rewrite the tileset of every held-back tilemap through `renames`.
///
/// References without a rename, and non-string items, are left as they
/// are. Returns the fixed-up
/// entries together with the number of references that changed.
pub fn fix_tile_references(
    held: Vec<(String, ResourceEntry)>,
    renames: &TileRenames,
) -> (Vec<(String, ResourceEntry)>, usize) {
    let mut rewritten = 0;
    let fixed = held
        .into_iter()
        .map(|(key, mut entry)| {
            if let ResourceEntry::Tilemap(record) = &mut entry {
                if let Some(tileset) = record.tileset_mut() {
                    for item in tileset.iter_mut() {
                        let Value::String(reference) = item else {
                            continue;
                        };
                        if let Some(target) = renames.get(reference) {
                            if target != reference.as_str() {
                                *reference = target.to_string();
                                rewritten += 1;
                            }
                        }
                    }
                }
            }
            (key, entry)
        })
        .collect();
    (fixed, rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carry_manifest::AssetRecord;
    use serde_json::json;

    fn tilemap(tileset: &[&str]) -> ResourceEntry {
        ResourceEntry::Tilemap(AssetRecord::with_data("MAP").with_field("tileset", json!(tileset)))
    }

    #[test]
    fn renamed_references_are_rewritten() {
        let mut renames = TileRenames::new();
        renames.insert("myTiles.tile0".into(), "myTiles.tile00".into());

        let (fixed, rewritten) = fix_tile_references(
            vec![(
                "level".into(),
                tilemap(&["myTiles.transparency16", "myTiles.tile0"]),
            )],
            &renames,
        );
        assert_eq!(rewritten, 1);
        assert_eq!(
            fixed[0].1.tileset(),
            vec!["myTiles.transparency16", "myTiles.tile00"]
        );
    }

    #[test]
    fn identity_mapping_counts_as_unchanged() {
        let mut renames = TileRenames::new();
        renames.insert("myTiles.tile0".into(), "myTiles.tile0".into());
        let (_, rewritten) =
            fix_tile_references(vec![("level".into(), tilemap(&["myTiles.tile0"]))], &renames);
        assert_eq!(rewritten, 0);
    }

    #[test]
    fn non_string_items_are_left_alone() {
        let mut renames = TileRenames::new();
        renames.insert("myTiles.a".into(), "myTiles.b".into());
        let entry = ResourceEntry::Tilemap(
            AssetRecord::new().with_field("tileset", json!([7, "myTiles.a", null])),
        );
        let (fixed, rewritten) = fix_tile_references(vec![("level".into(), entry)], &renames);
        assert_eq!(rewritten, 1);
        assert_eq!(fixed[0].1.to_value()["tileset"], json!([7, "myTiles.b", null]));
    }

    #[test]
    fn missing_tileset_is_left_alone() {
        let entry = ResourceEntry::Tilemap(AssetRecord::new());
        let (fixed, rewritten) =
            fix_tile_references(vec![("level".into(), entry.clone())], &TileRenames::new());
        assert_eq!(rewritten, 0);
        assert_eq!(fixed[0].1, entry);
    }
}
