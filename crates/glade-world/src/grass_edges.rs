//! Grass edge resolver: outlines every grassy macro-cell against bare ground,
//! different grass, and lower terrain.
//!
//! Same rule tables as the cliff resolver but per elevation tier and without
//! wall faces. A boundary exists toward a neighbor that is lower, or level
//! but carrying different grass. Outer corners use a stricter test than
//! straight edges: the three surrounding macro-cells must be lower or carry
//! strictly lower grass, so two equal grass regions meeting diagonally do
//! not both claim the corner.

use glade_catalog::{Catalog, CatalogSet, TileGroup};

use crate::draw::{
    draw_edge_horizontal, draw_edge_vertical, draw_inner_corner, draw_outer_corner,
};
use crate::edge_rules::{EdgeAxis, EDGE_RULES, OUTER_CORNERS};
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::surface::LayerStack;

const ROLE_HORIZONTAL: usize = 0;
const ROLE_VERTICAL: usize = 1;
const ROLE_OUTER_CORNER: usize = 2;
const ROLE_INNER_CORNER: usize = 3;

struct EdgeTiles {
    horizontal: TileGroup,
    vertical: TileGroup,
    outer: TileGroup,
    inner: TileGroup,
}

impl EdgeTiles {
    fn load(catalog: &Catalog, tier: u8) -> Result<Self, GenerationError> {
        let sheet = catalog.sheet_for_tier(tier)?;
        Ok(Self {
            horizontal: sheet.group_at(ROLE_HORIZONTAL)?.clone(),
            vertical: sheet.group_at(ROLE_VERTICAL)?.clone(),
            outer: sheet.group_at(ROLE_OUTER_CORNER)?.clone(),
            inner: sheet.group_at(ROLE_INNER_CORNER)?.clone(),
        })
    }
}

/// Resolve grass boundaries for every grassy macro-cell on one elevation
/// tier. Runs after grass painting and hole plugging.
pub fn draw_grass_outlines(
    grid: &Grid,
    layers: &mut LayerStack,
    catalogs: &CatalogSet,
    tier: u8,
) -> Result<(), GenerationError> {
    let low_tiles = EdgeTiles::load(&catalogs.low_grass_edge, tier)?;
    let high_tiles = EdgeTiles::load(&catalogs.high_grass_edge, tier)?;
    let t = tier as i32;
    let ti = tier as usize;
    let length = grid.length() as i32;
    let height = grid.height() as i32;
    let elev = |x: i32, y: i32| grid.elevation(x, y) as i32;

    for x in (0..length).step_by(2) {
        for y in (0..height).step_by(2) {
            if elev(x, y) != t {
                continue;
            }
            let g = grid.grass(x, y);
            if g == 0 {
                continue;
            }

            let tiles = if g == 1 { &low_tiles } else { &high_tiles };
            // An edge faces any neighbor that is lower or level with
            // different grass.
            let edge = |nx: i32, ny: i32| {
                grid.in_bounds(nx, ny)
                    && (elev(nx, ny) < t || (elev(nx, ny) == t && grid.grass(nx, ny) != g))
            };
            // Inner corners need the diagonal to be part of the same patch.
            let same = |nx: i32, ny: i32| {
                grid.in_bounds(nx, ny) && elev(nx, ny) == t && grid.grass(nx, ny) == g
            };
            // Outer corners require strictly lower grass, not merely
            // different, so only the higher patch draws the corner.
            let below = |nx: i32, ny: i32| {
                grid.in_bounds(nx, ny)
                    && (elev(nx, ny) < t || (elev(nx, ny) == t && grid.grass(nx, ny) < g))
            };
            let layer = if g == 1 {
                &mut layers.low_grass[ti]
            } else {
                &mut layers.high_grass[ti]
            };

            for rule in EDGE_RULES {
                let edge_pos = (x + rule.offset.0, y + rule.offset.1);
                if !edge(edge_pos.0, edge_pos.1) {
                    continue;
                }
                match rule.axis {
                    EdgeAxis::Vertical { right_side } => {
                        draw_edge_vertical(layer, edge_pos, right_side, &tiles.vertical)
                    }
                    EdgeAxis::Horizontal { top_side } => {
                        draw_edge_horizontal(layer, edge_pos, top_side, Some(&tiles.horizontal))
                    }
                }
                for corner in rule.inner {
                    if same(x + corner.diagonal.0, y + corner.diagonal.1) {
                        draw_inner_corner(
                            layer,
                            edge_pos,
                            corner.right_side,
                            corner.top_side,
                            &tiles.inner,
                        );
                    }
                }
            }

            for corner in OUTER_CORNERS {
                if corner.probes().iter().all(|&(dx, dy)| below(x + dx, y + dy)) {
                    draw_outer_corner(
                        layer,
                        (x + corner.diagonal.0, y + corner.diagonal.1),
                        corner.right_side,
                        corner.top_side,
                        &tiles.outer,
                    );
                }
            }
        }
    }

    tracing::debug!(
        tier,
        low = layers.low_grass[ti].len(),
        high = layers.high_grass[ti].len(),
        "grass outlines resolved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::test_catalogs;

    fn edge_group(catalogs: &CatalogSet, high: bool, tier: u8, role: usize) -> TileGroup {
        let catalog = if high {
            &catalogs.high_grass_edge
        } else {
            &catalogs.low_grass_edge
        };
        catalog.sheet_for_tier(tier).unwrap().group_at(role).unwrap().clone()
    }

    #[test]
    fn lone_low_grass_patch_outlines_all_four_sides() {
        let catalogs = test_catalogs();
        let mut grid = Grid::new(50, 50);
        let mut layers = LayerStack::default();
        grid.set_macro_grass(24, 24, 1);
        draw_grass_outlines(&grid, &mut layers, &catalogs, 0).unwrap();

        let vertical = edge_group(&catalogs, false, 0, ROLE_VERTICAL);
        let horizontal = edge_group(&catalogs, false, 0, ROLE_HORIZONTAL);
        let outer = edge_group(&catalogs, false, 0, ROLE_OUTER_CORNER);
        assert_eq!(layers.low_grass[0].get((23, 24)), Some(vertical.tiles[0]));
        assert_eq!(layers.low_grass[0].get((26, 24)), Some(vertical.tiles[1]));
        assert_eq!(layers.low_grass[0].get((26, 25)), Some(vertical.tiles[3]));
        assert_eq!(layers.low_grass[0].get((24, 23)), Some(horizontal.tiles[0]));
        assert_eq!(layers.low_grass[0].get((24, 26)), Some(horizontal.tiles[2]));
        // All four outer corners, none on the high grass layer.
        assert_eq!(layers.low_grass[0].get((23, 23)), Some(outer.tiles[0]));
        assert_eq!(layers.low_grass[0].get((26, 23)), Some(outer.tiles[1]));
        assert_eq!(layers.low_grass[0].get((23, 26)), Some(outer.tiles[2]));
        assert_eq!(layers.low_grass[0].get((26, 26)), Some(outer.tiles[3]));
        assert!(layers.high_grass[0].is_empty());
    }

    #[test]
    fn high_grass_outlines_against_low_grass_but_not_vice_versa_at_corners() {
        let catalogs = test_catalogs();
        let mut grid = Grid::new(50, 50);
        let mut layers = LayerStack::default();
        // High grass patch with a low grass patch diagonal to it.
        grid.set_macro_grass(24, 24, 2);
        grid.set_macro_grass(22, 22, 1);
        draw_grass_outlines(&grid, &mut layers, &catalogs, 0).unwrap();

        let outer_high = edge_group(&catalogs, true, 0, ROLE_OUTER_CORNER);
        // The high patch sees the low patch as strictly lower grass and
        // claims the shared corner.
        assert_eq!(layers.high_grass[0].get((23, 23)), Some(outer_high.tiles[0]));
        // The low patch does not claim its top-right corner toward the high
        // patch: grass 2 is not strictly lower than 1.
        assert!(!layers.low_grass[0].has((24, 24)));
    }

    #[test]
    fn inner_corner_joins_same_grass_diagonals() {
        let catalogs = test_catalogs();
        let mut grid = Grid::new(50, 50);
        let mut layers = LayerStack::default();
        grid.set_macro_grass(24, 24, 1);
        grid.set_macro_grass(22, 22, 1);
        draw_grass_outlines(&grid, &mut layers, &catalogs, 0).unwrap();

        let inner = edge_group(&catalogs, false, 0, ROLE_INNER_CORNER);
        // West check of (24,24): neighbor (22,24) is bare, diagonal (22,22)
        // is the same patch, so an inner corner replaces the straight edge.
        assert_eq!(layers.low_grass[0].get((23, 24)), Some(inner.tiles[1]));
    }

    #[test]
    fn elevation_boundary_counts_as_an_edge() {
        let catalogs = test_catalogs();
        let mut grid = Grid::new(50, 50);
        let mut layers = LayerStack::default();
        grid.set_macro_elevation(24, 24, 1);
        grid.set_macro_grass(24, 24, 1);
        // Same grass next door but one tier down: still an edge.
        grid.set_macro_grass(22, 24, 1);
        draw_grass_outlines(&grid, &mut layers, &catalogs, 1).unwrap();

        let vertical = edge_group(&catalogs, false, 1, ROLE_VERTICAL);
        assert_eq!(layers.low_grass[1].get((23, 24)), Some(vertical.tiles[0]));
    }

    #[test]
    fn level_same_grass_neighbor_is_not_an_edge() {
        let catalogs = test_catalogs();
        let mut grid = Grid::new(50, 50);
        let mut layers = LayerStack::default();
        grid.set_macro_grass(24, 24, 1);
        grid.set_macro_grass(26, 24, 1);
        draw_grass_outlines(&grid, &mut layers, &catalogs, 0).unwrap();

        // No edge between the two cells of the same patch.
        assert!(!layers.low_grass[0].has((26, 24)));
        assert!(!layers.low_grass[0].has((26, 25)));
    }
}
