//! Elevation and grass tier painting via biased chunk walks.
//!
//! Both painters lay 2x2 tiers onto the grid with the shared walk engine:
//! paint, decrement the coverage budget on success, then either restart the
//! chunk elsewhere or take a cardinal step of one macro-cell. Elevation
//! chunks bias their origins toward a per-tier ideal row; grass chunks start
//! anywhere.

use rand::Rng;

use crate::config::{ElevationConfig, GrassConfig, ELEVATION_TIERS, GRASS_TIERS};
use crate::grid::Grid;
use crate::walk::{random_macro_origin, step_cardinal};

/// Paint elevation tiers 1 and up. Tier 0 is the base and never painted
/// explicitly; higher tiers overpaint lower ones.
pub fn paint_elevation_tiers<R: Rng>(grid: &mut Grid, config: &ElevationConfig, rng: &mut R) {
    for tier in 1..ELEVATION_TIERS {
        let mut budget = (config.coverage[tier] * grid.cell_count() as f32) as i64;
        tracing::debug!(tier, budget, "painting elevation tier");

        while budget > 0 {
            let mut pos = roll_biased_origin(grid, config, tier, rng);

            let mut walking = true;
            while walking && budget > 0 {
                if grid.set_macro_elevation(pos.0, pos.1, tier as u8) {
                    budget -= 4;
                }
                if rng.gen_range(0.0..1.0f32) < config.new_chunk_chance {
                    walking = false;
                } else {
                    pos = step_cardinal(rng, pos, 2, 2, grid);
                }
            }
        }
    }
}

/// Roll `candidate_rolls` random origins and keep the one whose row is
/// closest to the tier's ideal row. Earlier rolls win ties.
fn roll_biased_origin<R: Rng>(
    grid: &Grid,
    config: &ElevationConfig,
    tier: usize,
    rng: &mut R,
) -> (i32, i32) {
    let ideal = config.ideal_row[tier] * grid.height() as f32;
    let mut chosen = random_macro_origin(rng, grid);
    for _ in 1..config.candidate_rolls {
        let candidate = random_macro_origin(rng, grid);
        if (candidate.1 as f32 - ideal).abs() < (chosen.1 as f32 - ideal).abs() {
            chosen = candidate;
        }
    }
    chosen
}

/// Paint grass tiers 1..=GRASS_TIERS with unbiased walk origins. The
/// coverage table is indexed by `tier - 1`.
pub fn paint_grass_tiers<R: Rng>(grid: &mut Grid, config: &GrassConfig, rng: &mut R) {
    for tier in 1..=GRASS_TIERS {
        let mut budget = (config.coverage[tier - 1] * grid.cell_count() as f32) as i64;
        tracing::debug!(tier, budget, "painting grass tier");

        while budget > 0 {
            let mut pos = random_macro_origin(rng, grid);

            let mut walking = true;
            while walking && budget > 0 {
                if grid.set_macro_grass(pos.0, pos.1, tier as u8) {
                    budget -= 4;
                }
                if rng.gen_range(0.0..1.0f32) < config.new_chunk_chance {
                    walking = false;
                } else {
                    pos = step_cardinal(rng, pos, 2, 2, grid);
                }
            }
        }
    }
}
