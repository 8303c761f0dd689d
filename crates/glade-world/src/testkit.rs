//! Shared test fixtures: a deterministic catalog set where every tile id is
//! unique, so assertions can pin down exactly which group painted a cell.

use glade_catalog::{Catalog, CatalogSet, PropTileSet, TierSheet, TileGroup, TileId};

struct TileAllocator(u32);

impl TileAllocator {
    fn tile(&mut self) -> TileId {
        let id = TileId(self.0);
        self.0 += 1;
        id
    }

    fn group(&mut self) -> TileGroup {
        TileGroup {
            weight: 1.0,
            tiles: [self.tile(), self.tile(), self.tile(), self.tile()],
        }
    }

    fn sheet(&mut self, tier: u8, groups: usize) -> TierSheet {
        TierSheet {
            tier,
            groups: (0..groups).map(|_| self.group()).collect(),
        }
    }

    fn catalog(&mut self, tiers: &[u8], groups: usize) -> Catalog {
        Catalog::new(tiers.iter().map(|&t| self.sheet(t, groups)).collect())
    }
}

/// Build a catalog set covering all three elevation tiers, with single-group
/// ground/grass sheets so weighted picks are deterministic.
pub fn test_catalogs() -> CatalogSet {
    let mut alloc = TileAllocator(1);
    CatalogSet {
        ground: alloc.catalog(&[0, 1, 2], 1),
        cliff_outline: alloc.catalog(&[1, 2], 4),
        cliff_face: alloc.catalog(&[1, 2], 5),
        low_grass: alloc.catalog(&[0, 1, 2], 1),
        low_grass_edge: alloc.catalog(&[0, 1, 2], 4),
        high_grass: alloc.catalog(&[0, 1, 2], 1),
        high_grass_edge: alloc.catalog(&[0, 1, 2], 4),
        props: PropTileSet {
            tree_trunks: [alloc.tile(), alloc.tile()],
            tree_canopies: [alloc.tile(), alloc.tile()],
            bushes: vec![alloc.tile(), alloc.tile(), alloc.tile()],
            rock: alloc.tile(),
            tall_grass: alloc.tile(),
        },
    }
}
