//! Environment prop scattering: trees, bushes, rocks, and tall grass laid
//! down in chunk walks after every terrain layer is final.
//!
//! Each kind has a cell budget derived from its coverage fraction divided by
//! a per-kind cost constant, and a footprint of cells it reserves. A spot is
//! legal when the whole footprint is in bounds, free of other props, and
//! clear of every cliff layer. The visual tile lands on the footprint's
//! anchor cell only; the rest is reserved space.

use glade_catalog::PropTileSet;
use rand::Rng;

use crate::config::PropConfig;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::surface::LayerStack;
use crate::walk::{random_macro_origin, step_free};

/// Budget cost per placed prop, tuned so coverage fractions stay comparable
/// across footprint sizes.
const TREE_CELL_COST: f32 = 25.0;
const BUSH_CELL_COST: f32 = 4.0;
const ROCK_CELL_COST: f32 = 4.0;
const TALL_GRASS_CELL_COST: f32 = 6.0;

/// Trees reserve a 5x2 clearing centered on the anchor.
fn tree_footprint((x, y): (i32, i32)) -> [(i32, i32); 10] {
    [
        (x, y),
        (x + 1, y),
        (x + 2, y),
        (x - 1, y),
        (x - 2, y),
        (x, y + 1),
        (x + 1, y + 1),
        (x + 2, y + 1),
        (x - 1, y + 1),
        (x - 2, y + 1),
    ]
}

/// Bushes and rocks reserve a 2x1 strip.
fn strip_footprint((x, y): (i32, i32)) -> [(i32, i32); 2] {
    [(x, y), (x + 1, y)]
}

/// Tall grass reserves the full macro-cell.
fn patch_footprint((x, y): (i32, i32)) -> [(i32, i32); 4] {
    [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
}

fn spot_is_legal(grid: &Grid, layers: &LayerStack, footprint: &[(i32, i32)]) -> bool {
    footprint.iter().all(|&(x, y)| {
        grid.in_bounds(x, y) && !grid.cell(x, y).prop && !layers.any_cliff_tile((x, y))
    })
}

fn reserve(grid: &mut Grid, footprint: &[(i32, i32)]) {
    for &(x, y) in footprint {
        grid.cell_mut(x, y).prop = true;
    }
}

/// Scatter trees: trunk on the collision layer, canopy on the foliage layer
/// above it. Species index 0 is the round tree, 1 the pine.
pub fn scatter_trees<R: Rng>(
    grid: &mut Grid,
    layers: &mut LayerStack,
    props: &PropTileSet,
    config: &PropConfig,
    rng: &mut R,
) {
    let mut budget =
        (grid.cell_count() as f32 * config.tree_coverage / TREE_CELL_COST) as i64;
    tracing::debug!(budget, "scattering trees");

    while budget > 0 {
        let mut pos = random_macro_origin(rng, grid);
        let mut walking = true;
        while walking && budget > 0 {
            let footprint = tree_footprint(pos);
            if spot_is_legal(grid, layers, &footprint) {
                let species = if rng.gen_range(0.0..1.0f32) < config.round_tree_chance {
                    0
                } else {
                    1
                };
                layers
                    .environment_collision
                    .set(footprint[0], Some(props.tree_trunks[species]));
                layers.foliage.set(footprint[0], Some(props.tree_canopies[species]));
                reserve(grid, &footprint);
                budget -= 1;
            }
            if rng.gen_range(0.0..1.0f32) < config.tree_new_chunk_chance {
                walking = false;
            } else {
                pos = step_free(rng, pos, 5, 5, grid);
            }
        }
    }
}

/// Scatter bushes on the walkable environment layer, picking a random
/// variant per placement. An empty variant list is a configuration error:
/// the walk could never spend its budget.
pub fn scatter_bushes<R: Rng>(
    grid: &mut Grid,
    layers: &mut LayerStack,
    props: &PropTileSet,
    config: &PropConfig,
    rng: &mut R,
) -> Result<(), GenerationError> {
    if props.bushes.is_empty() {
        return Err(GenerationError::EmptyPropTiles { kind: "bushes" });
    }
    let mut budget =
        (grid.cell_count() as f32 * config.bush_coverage / BUSH_CELL_COST) as i64;
    tracing::debug!(budget, "scattering bushes");

    while budget > 0 {
        let mut pos = random_macro_origin(rng, grid);
        let mut walking = true;
        while walking && budget > 0 {
            let footprint = strip_footprint(pos);
            if spot_is_legal(grid, layers, &footprint) {
                let variant = rng.gen_range(0..props.bushes.len());
                layers.environment.set(footprint[0], Some(props.bushes[variant]));
                reserve(grid, &footprint);
                budget -= 1;
            }
            if rng.gen_range(0.0..1.0f32) < config.bush_new_chunk_chance {
                walking = false;
            } else {
                pos = step_free(rng, pos, 5, 5, grid);
            }
        }
    }
    Ok(())
}

/// Scatter rocks on the collision layer.
pub fn scatter_rocks<R: Rng>(
    grid: &mut Grid,
    layers: &mut LayerStack,
    props: &PropTileSet,
    config: &PropConfig,
    rng: &mut R,
) {
    let mut budget =
        (grid.cell_count() as f32 * config.rock_coverage / ROCK_CELL_COST) as i64;
    tracing::debug!(budget, "scattering rocks");

    while budget > 0 {
        let mut pos = random_macro_origin(rng, grid);
        let mut walking = true;
        while walking && budget > 0 {
            let footprint = strip_footprint(pos);
            if spot_is_legal(grid, layers, &footprint) {
                layers.environment_collision.set(footprint[0], Some(props.rock));
                reserve(grid, &footprint);
                budget -= 1;
            }
            if rng.gen_range(0.0..1.0f32) < config.rock_new_chunk_chance {
                walking = false;
            } else {
                pos = step_free(rng, pos, 1, 1, grid);
            }
        }
    }
}

/// Scatter tall grass patches on the walkable environment layer.
pub fn scatter_tall_grass<R: Rng>(
    grid: &mut Grid,
    layers: &mut LayerStack,
    props: &PropTileSet,
    config: &PropConfig,
    rng: &mut R,
) {
    let mut budget =
        (grid.cell_count() as f32 * config.tall_grass_coverage / TALL_GRASS_CELL_COST) as i64;
    tracing::debug!(budget, "scattering tall grass");

    while budget > 0 {
        let mut pos = random_macro_origin(rng, grid);
        let mut walking = true;
        while walking && budget > 0 {
            let footprint = patch_footprint(pos);
            if spot_is_legal(grid, layers, &footprint) {
                layers.environment.set(footprint[0], Some(props.tall_grass));
                reserve(grid, &footprint);
                budget -= 1;
            }
            if rng.gen_range(0.0..1.0f32) < config.tall_grass_new_chunk_chance {
                walking = false;
            } else {
                pos = step_free(rng, pos, 1, 1, grid);
            }
        }
    }
}
