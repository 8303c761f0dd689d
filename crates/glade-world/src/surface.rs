//! Sparse tile layers standing in for the renderer's tilemaps.
//!
//! Layers accept any integer coordinate: wall faces legitimately overhang
//! below row 0 when a cliff reaches the bottom edge of the grid.

use std::collections::HashMap;

use glade_catalog::TileId;

/// Number of elevation tiers, and therefore of stacked cliff/grass layers.
pub const TIER_COUNT: usize = 3;

/// One render layer: a sparse map from cell coordinate to tile handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileLayer {
    tiles: HashMap<(i32, i32), TileId>,
}

impl TileLayer {
    /// Place or clear a tile. `None` removes whatever is there.
    pub fn set(&mut self, pos: (i32, i32), tile: Option<TileId>) {
        match tile {
            Some(tile) => {
                self.tiles.insert(pos, tile);
            }
            None => {
                self.tiles.remove(&pos);
            }
        }
    }

    pub fn get(&self, pos: (i32, i32)) -> Option<TileId> {
        self.tiles.get(&pos).copied()
    }

    pub fn has(&self, pos: (i32, i32)) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32), &TileId)> {
        self.tiles.iter()
    }
}

/// Every layer the generator paints, in draw order back to front.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    pub ground: TileLayer,
    pub cliffs: [TileLayer; TIER_COUNT],
    pub low_grass: [TileLayer; TIER_COUNT],
    pub high_grass: [TileLayer; TIER_COUNT],
    pub environment: TileLayer,
    pub environment_collision: TileLayer,
    pub foliage: TileLayer,
}

impl LayerStack {
    /// Wipe every layer; called whenever generation restarts at phase 0.
    pub fn reset(&mut self) {
        self.ground.clear();
        for layer in &mut self.cliffs {
            layer.clear();
        }
        for layer in &mut self.low_grass {
            layer.clear();
        }
        for layer in &mut self.high_grass {
            layer.clear();
        }
        self.environment.clear();
        self.environment_collision.clear();
        self.foliage.clear();
    }

    /// True when any cliff layer holds a tile at `pos`. Props may not cover
    /// cliff faces or outlines.
    pub fn any_cliff_tile(&self, pos: (i32, i32)) -> bool {
        self.cliffs.iter().any(|layer| layer.has(pos))
    }
}
