//! Generation parameters. `sanitized` clamps every field into its
//! documented range before a run.

use serde::{Deserialize, Serialize};

use crate::grid::{MAX_GRID_DIM, MIN_GRID_DIM};

/// Number of elevation tiers painted (tier 0 is the implicit base).
pub const ELEVATION_TIERS: usize = 3;
/// Number of explicit grass tiers (grass 0 means bare ground).
pub const GRASS_TIERS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub grid_length: usize,
    pub grid_height: usize,
    pub elevation: ElevationConfig,
    pub grass: GrassConfig,
    pub props: PropConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationConfig {
    /// Fraction of all cells each tier tries to cover, indexed by tier.
    pub coverage: [f32; ELEVATION_TIERS],
    /// Preferred row per tier as a fraction of grid height: 0 favors the
    /// bottom, 1 the top.
    pub ideal_row: [f32; ELEVATION_TIERS],
    /// Origins rolled per chunk; the one nearest the ideal row wins.
    pub candidate_rolls: usize,
    /// Chance to abandon the walk and restart elsewhere after each paint.
    pub new_chunk_chance: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassConfig {
    /// Coverage per grass tier, index 0 = low grass, 1 = high grass.
    pub coverage: [f32; GRASS_TIERS],
    pub new_chunk_chance: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropConfig {
    pub tree_coverage: f32,
    pub bush_coverage: f32,
    pub rock_coverage: f32,
    pub tall_grass_coverage: f32,
    pub tree_new_chunk_chance: f32,
    pub bush_new_chunk_chance: f32,
    pub rock_new_chunk_chance: f32,
    pub tall_grass_new_chunk_chance: f32,
    /// Chance a placed tree is the round species rather than a pine.
    pub round_tree_chance: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_length: 50,
            grid_height: 50,
            elevation: ElevationConfig::default(),
            grass: GrassConfig::default(),
            props: PropConfig::default(),
        }
    }
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            coverage: [0.6, 0.4, 0.4],
            ideal_row: [0.0, 0.5, 1.0],
            candidate_rolls: 5,
            new_chunk_chance: 0.2,
        }
    }
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            coverage: [0.6, 0.4],
            new_chunk_chance: 0.2,
        }
    }
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            tree_coverage: 0.05,
            bush_coverage: 0.05,
            rock_coverage: 0.05,
            tall_grass_coverage: 0.05,
            tree_new_chunk_chance: 0.2,
            bush_new_chunk_chance: 0.2,
            rock_new_chunk_chance: 0.2,
            tall_grass_new_chunk_chance: 0.2,
            round_tree_chance: 0.6,
        }
    }
}

impl GenerationConfig {
    /// A copy with every field clamped into its legal range.
    pub fn sanitized(&self) -> Self {
        let mut cfg = self.clone();
        cfg.grid_length = cfg.grid_length.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        cfg.grid_height = cfg.grid_height.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        for value in &mut cfg.elevation.coverage {
            *value = value.clamp(0.0, 1.0);
        }
        for value in &mut cfg.elevation.ideal_row {
            *value = value.clamp(0.0, 1.0);
        }
        cfg.elevation.candidate_rolls = cfg.elevation.candidate_rolls.clamp(2, 6);
        cfg.elevation.new_chunk_chance = cfg.elevation.new_chunk_chance.clamp(0.0, 1.0);
        for value in &mut cfg.grass.coverage {
            *value = value.clamp(0.0, 0.5);
        }
        cfg.grass.new_chunk_chance = cfg.grass.new_chunk_chance.clamp(0.0, 1.0);
        cfg.props.tree_coverage = cfg.props.tree_coverage.clamp(0.0, 0.3);
        cfg.props.bush_coverage = cfg.props.bush_coverage.clamp(0.0, 0.3);
        cfg.props.rock_coverage = cfg.props.rock_coverage.clamp(0.0, 0.3);
        cfg.props.tall_grass_coverage = cfg.props.tall_grass_coverage.clamp(0.0, 0.3);
        cfg.props.tree_new_chunk_chance = cfg.props.tree_new_chunk_chance.clamp(0.0, 1.0);
        cfg.props.bush_new_chunk_chance = cfg.props.bush_new_chunk_chance.clamp(0.0, 1.0);
        cfg.props.rock_new_chunk_chance = cfg.props.rock_new_chunk_chance.clamp(0.0, 1.0);
        cfg.props.tall_grass_new_chunk_chance =
            cfg.props.tall_grass_new_chunk_chance.clamp(0.0, 1.0);
        cfg.props.round_tree_chance = cfg.props.round_tree_chance.clamp(0.0, 1.0);
        cfg
    }
}
