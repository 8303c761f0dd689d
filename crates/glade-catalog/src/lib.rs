//! Tile-asset catalogs: tier sheets, weighted variant groups, and prop tiles.
//!
//! Catalogs are immutable configuration data loaded before generation and
//! consumed read-only by the painters and edge resolvers. Each macro-cell
//! visual is a group of four sub-tiles ordered top-left, top-right,
//! bottom-left, bottom-right.

mod error;

pub use error::CatalogError;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque handle to one visual tile. The renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// One macro-cell visual: four sub-tiles plus its weighted-random pick chance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGroup {
    #[serde(default = "default_weight")]
    pub weight: f32,
    pub tiles: [TileId; 4],
}

fn default_weight() -> f32 {
    1.0
}

/// All variant groups for one elevation or vegetation tier.
///
/// Positional-role sheets (edges, corners, wall faces) use fixed indices:
/// 0 = horizontal edge, 1 = vertical edge, 2 = outer corner, 3 = inner
/// corner. Cliff-face sheets: 0 = single wall, 1 = half wall, 2 = double-wall
/// lower extension, 3 = right corner column, 4 = left corner column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSheet {
    pub tier: u8,
    pub groups: Vec<TileGroup>,
}

impl TierSheet {
    /// Fetch the group at a fixed role index.
    pub fn group_at(&self, index: usize) -> Result<&TileGroup, CatalogError> {
        self.groups.get(index).ok_or(CatalogError::IndexOutOfRange {
            tier: self.tier,
            index,
            len: self.groups.len(),
        })
    }

    /// Pick a group at random, biased by group weights.
    ///
    /// Negative weights count as zero. When every weight is zero the first
    /// group is returned, so generation never produces a missing tile.
    pub fn weighted_random_group<R: Rng>(&self, rng: &mut R) -> Result<&TileGroup, CatalogError> {
        let first = self
            .groups
            .first()
            .ok_or(CatalogError::EmptySheet { tier: self.tier })?;

        let total: f32 = self.groups.iter().map(|g| g.weight.max(0.0)).sum();
        if total <= 0.0 {
            return Ok(first);
        }

        let mut roll = rng.gen_range(0.0..total);
        for group in &self.groups {
            roll -= group.weight.max(0.0);
            if roll < 0.0 {
                return Ok(group);
            }
        }
        // Float rounding can leave roll at exactly 0.0 after the last group.
        Ok(self.groups.last().unwrap_or(first))
    }
}

/// A set of tier sheets for one visual concern (ground, cliff edges, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub sheets: Vec<TierSheet>,
}

impl Catalog {
    pub fn new(sheets: Vec<TierSheet>) -> Self {
        Self { sheets }
    }

    /// Find the sheet whose tier matches. First match wins.
    pub fn sheet_for_tier(&self, tier: u8) -> Result<&TierSheet, CatalogError> {
        self.sheets
            .iter()
            .find(|sheet| sheet.tier == tier)
            .ok_or(CatalogError::MissingTier(tier))
    }
}

/// Tiles for scattered environment props. Tree index 0 is the round species,
/// index 1 the pine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropTileSet {
    pub tree_trunks: [TileId; 2],
    pub tree_canopies: [TileId; 2],
    pub bushes: Vec<TileId>,
    pub rock: TileId,
    pub tall_grass: TileId,
}

/// Every catalog the generation pipeline consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSet {
    pub ground: Catalog,
    pub cliff_outline: Catalog,
    pub cliff_face: Catalog,
    pub low_grass: Catalog,
    pub low_grass_edge: Catalog,
    pub high_grass: Catalog,
    pub high_grass_edge: Catalog,
    pub props: PropTileSet,
}
