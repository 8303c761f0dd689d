//! Cliff edge resolver: straight edges, corners, and stacked wall faces
//! around every macro-cell of the target elevation tier.
//!
//! Directions and corners are evaluated through the shared rule tables in
//! [`crate::edge_rules`]; wall height below a south edge or bottom corner is
//! classified by an explicit state machine before anything is painted.
//! The north-edge overhang suppression clears cells on every cliff layer,
//! wall faces below the bottom grid row land on negative coordinates, and a
//! matching diagonal at `(+-2, -4)` abandons the rest of the macro-cell's
//! corner processing.

use glade_catalog::{CatalogSet, TileGroup};

use crate::draw::{
    draw_corner_column, draw_edge_horizontal, draw_edge_vertical, draw_inner_corner,
    draw_macro, draw_macro_no_overpaint, draw_macro_side_overpaint, draw_outer_corner,
};
use crate::edge_rules::{EdgeAxis, EDGE_RULES, OUTER_CORNERS};
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::surface::{LayerStack, TileLayer};

/// Role indices into the cliff outline sheet.
const ROLE_HORIZONTAL: usize = 0;
const ROLE_VERTICAL: usize = 1;
const ROLE_OUTER_CORNER: usize = 2;
const ROLE_INNER_CORNER: usize = 3;

/// Role indices into the cliff face sheet.
const ROLE_SINGLE_WALL: usize = 0;
const ROLE_HALF_WALL: usize = 1;
const ROLE_DOUBLE_WALL_LOWER: usize = 2;
const ROLE_RIGHT_CORNER_COLUMN: usize = 3;
const ROLE_LEFT_CORNER_COLUMN: usize = 4;

struct CliffTiles {
    horizontal: TileGroup,
    vertical: TileGroup,
    outer: TileGroup,
    inner: TileGroup,
    single_wall: TileGroup,
    half_wall: TileGroup,
    double_wall_lower: TileGroup,
    right_column: TileGroup,
    left_column: TileGroup,
}

impl CliffTiles {
    fn load(catalogs: &CatalogSet, tier: u8) -> Result<Self, GenerationError> {
        let outline = catalogs.cliff_outline.sheet_for_tier(tier)?;
        let face = catalogs.cliff_face.sheet_for_tier(tier)?;
        Ok(Self {
            horizontal: outline.group_at(ROLE_HORIZONTAL)?.clone(),
            vertical: outline.group_at(ROLE_VERTICAL)?.clone(),
            outer: outline.group_at(ROLE_OUTER_CORNER)?.clone(),
            inner: outline.group_at(ROLE_INNER_CORNER)?.clone(),
            single_wall: face.group_at(ROLE_SINGLE_WALL)?.clone(),
            half_wall: face.group_at(ROLE_HALF_WALL)?.clone(),
            double_wall_lower: face.group_at(ROLE_DOUBLE_WALL_LOWER)?.clone(),
            right_column: face.group_at(ROLE_RIGHT_CORNER_COLUMN)?.clone(),
            left_column: face.group_at(ROLE_LEFT_CORNER_COLUMN)?.clone(),
        })
    }
}

/// Wall height below a south edge, from lowest obstruction upward.
enum Wall {
    /// Next macro-cell down is at this tier again; no face needed.
    None,
    /// The wall runs off the bottom of the grid one macro-cell down.
    Half,
    Single,
    Double,
    /// Double wall whose lower extension crosses the grid boundary; its
    /// bottom row is cleared after painting.
    DoubleAtBoundary,
}

fn classify_wall(grid: &Grid, x: i32, y: i32, t: i32) -> Wall {
    let h = |px: i32, py: i32| grid.elevation(px, py) as i32;
    if y - 4 < 0 {
        return Wall::Half;
    }
    if h(x, y - 4) >= t {
        return Wall::None;
    }
    if y - 6 < 0 && h(x, y - 4) < t - 1 {
        return Wall::DoubleAtBoundary;
    }
    if y - 6 >= 0 && h(x, y - 6) < t - 1 && h(x, y - 4) == h(x, y - 6) {
        return Wall::Double;
    }
    Wall::Single
}

/// Wall column below a bottom outer corner. `Abort` ends all corner
/// processing for the macro-cell when a tier match sits diagonally below.
enum Column {
    None,
    Abort,
    Single,
    /// Single column at the grid boundary; the overhang cell is cleared.
    SingleAtBoundary,
    Double,
    /// Double column crossing the grid boundary; its lowest cell is cleared.
    DoubleAtBoundary,
}

fn classify_column(grid: &Grid, x: i32, y: i32, t: i32, sx: i32) -> Column {
    let h = |px: i32, py: i32| grid.elevation(px, py) as i32;
    if y - 4 < 0 {
        return Column::SingleAtBoundary;
    }
    if h(x, y - 4) >= t {
        return Column::None;
    }
    if h(x + sx * 2, y - 4) == t {
        return Column::Abort;
    }
    if y - 6 < 0 && h(x, y - 4) < t - 1 {
        return Column::DoubleAtBoundary;
    }
    if y - 6 >= 0
        && h(x + sx * 2, y - 6) < t - 1
        && h(x, y - 2) != t - 1
        && h(x, y - 4) != t - 1
        && h(x + sx * 2, y - 4) == h(x + sx * 2, y - 6)
        && h(x, y - 6) == h(x + sx * 2, y - 6)
    {
        return Column::Double;
    }
    Column::Single
}

/// Borrow the active cliff layer together with the tier-below background
/// layer it defers to.
fn cliff_pair(layers: &mut LayerStack, tier: usize) -> (&mut TileLayer, &mut TileLayer) {
    let (below, from_tier) = layers.cliffs.split_at_mut(tier);
    (&mut from_tier[0], &mut below[tier - 1])
}

/// Resolve cliff boundaries for one elevation tier. Must run once per tier
/// from 1 upward, after elevation painting and hole plugging are complete.
pub fn draw_cliff_outlines(
    grid: &Grid,
    layers: &mut LayerStack,
    catalogs: &CatalogSet,
    tier: u8,
) -> Result<(), GenerationError> {
    debug_assert!(tier >= 1, "tier 0 has no cliffs");
    let tiles = CliffTiles::load(catalogs, tier)?;
    let t = tier as i32;
    let ti = tier as usize;
    let length = grid.length() as i32;
    let height = grid.height() as i32;
    let h = |x: i32, y: i32| grid.elevation(x, y) as i32;

    for x in (0..length).step_by(2) {
        'cell: for y in (0..height).step_by(2) {
            if h(x, y) != t {
                continue;
            }

            for rule in EDGE_RULES {
                let edge_pos = (x + rule.offset.0, y + rule.offset.1);
                if !grid.in_bounds(edge_pos.0, edge_pos.1) || h(edge_pos.0, edge_pos.1) >= t {
                    continue;
                }
                match rule.axis {
                    EdgeAxis::Vertical { right_side } => draw_edge_vertical(
                        &mut layers.cliffs[ti],
                        edge_pos,
                        right_side,
                        &tiles.vertical,
                    ),
                    EdgeAxis::Horizontal { top_side } => draw_edge_horizontal(
                        &mut layers.cliffs[ti],
                        edge_pos,
                        top_side,
                        Some(&tiles.horizontal),
                    ),
                }
                for corner in rule.inner {
                    let probe = (x + corner.diagonal.0, y + corner.diagonal.1);
                    if grid.in_bounds(probe.0, probe.1) && h(probe.0, probe.1) == t {
                        draw_inner_corner(
                            &mut layers.cliffs[ti],
                            edge_pos,
                            corner.right_side,
                            corner.top_side,
                            &tiles.inner,
                        );
                    }
                }
                match rule.offset {
                    // South edge exposes the wall below.
                    (0, -2) => draw_south_wall(grid, layers, &tiles, x, y, t, ti),
                    // North edge suppresses the overhang above this
                    // macro-cell on every cliff layer.
                    (0, 2) => {
                        for layer in &mut layers.cliffs {
                            draw_edge_horizontal(layer, (x, y), false, None);
                        }
                    }
                    _ => {}
                }
            }

            for corner in OUTER_CORNERS {
                let all_lower = corner.probes().iter().all(|&(dx, dy)| {
                    grid.in_bounds(x + dx, y + dy) && h(x + dx, y + dy) < t
                });
                if !all_lower {
                    continue;
                }
                let corner_pos = (x + corner.diagonal.0, y + corner.diagonal.1);
                draw_outer_corner(
                    &mut layers.cliffs[ti],
                    corner_pos,
                    corner.right_side,
                    corner.top_side,
                    &tiles.outer,
                );
                if corner.is_bottom()
                    && draw_corner_wall_column(grid, layers, &tiles, x, y, t, ti, corner.diagonal.0 / 2)
                {
                    continue 'cell;
                }
            }
        }
    }

    tracing::debug!(tier, tiles = layers.cliffs[ti].len(), "cliff outlines resolved");
    Ok(())
}

fn draw_south_wall(
    grid: &Grid,
    layers: &mut LayerStack,
    tiles: &CliffTiles,
    x: i32,
    y: i32,
    t: i32,
    ti: usize,
) {
    let kind = classify_wall(grid, x, y, t);
    if matches!(kind, Wall::None) {
        return;
    }
    if matches!(kind, Wall::Half) {
        draw_macro(&mut layers.cliffs[ti - 1], (x, y - 2), &tiles.half_wall);
        return;
    }

    let length = grid.length() as i32;
    let h = |px: i32, py: i32| grid.elevation(px, py) as i32;
    // A side may only overpaint the active layer when no tier neighbor
    // already claimed that column.
    let left_overpaints =
        !((x - 2 >= 0 && h(x - 2, y - 2) == t) || (x - 2 >= 0 && h(x - 2, y - 4) == t));
    let right_overpaints = !((x + 2 < length && h(x + 2, y - 2) == t)
        || (x + 2 < length && h(x + 2, y - 4) == t));
    let upper = if matches!(kind, Wall::Single) {
        &tiles.single_wall
    } else {
        &tiles.half_wall
    };
    let (primary, background) = cliff_pair(layers, ti);
    draw_macro_side_overpaint(primary, background, (x, y - 3), upper, left_overpaints, right_overpaints);

    match kind {
        Wall::DoubleAtBoundary => {
            draw_macro(&mut layers.cliffs[ti - 1], (x, y - 5), &tiles.double_wall_lower);
            layers.cliffs[ti - 1].set((x, y - 5), None);
            layers.cliffs[ti - 1].set((x + 1, y - 5), None);
        }
        Wall::Double => {
            let neighbor_claims_lower = (x - 2 >= 0 && h(x - 2, y - 4) >= t - 1)
                || (x + 2 < length && h(x + 2, y - 4) >= t - 1)
                || (x - 2 >= 0 && h(x - 2, y - 2) == t)
                || (x + 2 < length && h(x + 2, y - 2) == t)
                || (x - 2 >= 0 && h(x - 2, y - 6) >= t - 1)
                || (x + 2 < length && h(x + 2, y - 6) >= t - 1);
            if neighbor_claims_lower {
                draw_macro_no_overpaint(
                    &mut layers.cliffs[ti - 1],
                    (x, y - 5),
                    &tiles.double_wall_lower,
                );
            } else {
                draw_macro(&mut layers.cliffs[ti - 1], (x, y - 5), &tiles.double_wall_lower);
            }
        }
        _ => {}
    }
}

/// Paint the wall column under a bottom outer corner. `sx` is -1 for the
/// bottom-left corner, +1 for the bottom-right. Returns true when corner
/// processing for this macro-cell must be abandoned.
fn draw_corner_wall_column(
    grid: &Grid,
    layers: &mut LayerStack,
    tiles: &CliffTiles,
    x: i32,
    y: i32,
    t: i32,
    ti: usize,
    sx: i32,
) -> bool {
    let right_side = sx < 0;
    let group = if right_side { &tiles.left_column } else { &tiles.right_column };
    let corner_pos = (x + sx * 2, y - 2);
    let col_x = if right_side { corner_pos.0 + 1 } else { corner_pos.0 };

    match classify_column(grid, x, y, t, sx) {
        Column::None => {}
        Column::Abort => return true,
        Column::Single => {
            draw_corner_column(&mut layers.cliffs[ti], corner_pos, right_side, group, false);
        }
        Column::SingleAtBoundary => {
            draw_corner_column(&mut layers.cliffs[ti], corner_pos, right_side, group, false);
            layers.cliffs[ti].set((col_x, y - 3), None);
        }
        Column::Double => {
            draw_corner_column(&mut layers.cliffs[ti], corner_pos, right_side, group, true);
        }
        Column::DoubleAtBoundary => {
            draw_corner_column(&mut layers.cliffs[ti], corner_pos, right_side, group, true);
            layers.cliffs[ti].set((col_x, y - 5), None);
        }
    }
    false
}
