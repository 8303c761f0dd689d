//! Built-in placeholder catalog used when no `--catalog` file is supplied.
//! Tile ids are sequential and unique so the preview can tell layers apart;
//! a real deployment maps ids to sprites.

use glade_catalog::{Catalog, CatalogSet, PropTileSet, TierSheet, TileGroup, TileId};

struct Ids(u32);

impl Ids {
    fn tile(&mut self) -> TileId {
        let id = TileId(self.0);
        self.0 += 1;
        id
    }

    fn group(&mut self, weight: f32) -> TileGroup {
        TileGroup {
            weight,
            tiles: [self.tile(), self.tile(), self.tile(), self.tile()],
        }
    }

    fn variant_sheet(&mut self, tier: u8) -> TierSheet {
        // One common variant and two rarer decorated ones per tier.
        TierSheet {
            tier,
            groups: vec![self.group(6.0), self.group(1.0), self.group(1.0)],
        }
    }

    fn role_sheet(&mut self, tier: u8, roles: usize) -> TierSheet {
        TierSheet {
            tier,
            groups: (0..roles).map(|_| self.group(1.0)).collect(),
        }
    }

    fn variant_catalog(&mut self, tiers: &[u8]) -> Catalog {
        Catalog::new(tiers.iter().map(|&t| self.variant_sheet(t)).collect())
    }

    fn role_catalog(&mut self, tiers: &[u8], roles: usize) -> Catalog {
        Catalog::new(tiers.iter().map(|&t| self.role_sheet(t, roles)).collect())
    }
}

pub fn builtin_catalogs() -> CatalogSet {
    let mut ids = Ids(1);
    CatalogSet {
        ground: ids.variant_catalog(&[0, 1, 2]),
        cliff_outline: ids.role_catalog(&[1, 2], 4),
        cliff_face: ids.role_catalog(&[1, 2], 5),
        low_grass: ids.variant_catalog(&[0, 1, 2]),
        low_grass_edge: ids.role_catalog(&[0, 1, 2], 4),
        high_grass: ids.variant_catalog(&[0, 1, 2]),
        high_grass_edge: ids.role_catalog(&[0, 1, 2], 4),
        props: PropTileSet {
            tree_trunks: [ids.tile(), ids.tile()],
            tree_canopies: [ids.tile(), ids.tile()],
            bushes: vec![ids.tile(), ids.tile(), ids.tile()],
            rock: ids.tile(),
            tall_grass: ids.tile(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_tier_and_role() {
        let set = builtin_catalogs();
        for tier in 0..=2 {
            assert!(set.ground.sheet_for_tier(tier).is_ok());
            assert!(set.low_grass.sheet_for_tier(tier).is_ok());
            assert!(set.high_grass_edge.sheet_for_tier(tier).unwrap().group_at(3).is_ok());
        }
        for tier in 1..=2 {
            assert!(set.cliff_outline.sheet_for_tier(tier).unwrap().group_at(3).is_ok());
            assert!(set.cliff_face.sheet_for_tier(tier).unwrap().group_at(4).is_ok());
        }
        assert_eq!(set.props.bushes.len(), 3);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let set = builtin_catalogs();
        let mut seen = std::collections::HashSet::new();
        let mut check = |catalog: &Catalog| {
            for sheet in &catalog.sheets {
                for group in &sheet.groups {
                    for tile in group.tiles {
                        assert!(seen.insert(tile), "duplicate id {tile:?}");
                    }
                }
            }
        };
        check(&set.ground);
        check(&set.cliff_outline);
        check(&set.cliff_face);
        check(&set.low_grass);
        check(&set.low_grass_edge);
        check(&set.high_grass);
        check(&set.high_grass_edge);
    }
}
