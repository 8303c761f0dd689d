//! The generation pipeline: a 14-phase state machine over grid and layers.
//!
//! Phases mirror the interactive stepping order: elevation painting and hole
//! plugging, ground tiles, cliff resolution per tier, grass painting and
//! resolution per tier, then the four prop passes. `run_full` executes all
//! phases in one call; `step` advances one phase at a time and wraps back to
//! phase 0, which discards all prior state.

use glade_catalog::CatalogSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cliffs::draw_cliff_outlines;
use crate::config::GenerationConfig;
use crate::draw::draw_macro;
use crate::error::GenerationError;
use crate::grass_edges::draw_grass_outlines;
use crate::grid::Grid;
use crate::holes::{plug_elevation_holes, plug_grass_holes};
use crate::painter::{paint_elevation_tiers, paint_grass_tiers};
use crate::props::{scatter_bushes, scatter_rocks, scatter_tall_grass, scatter_trees};
use crate::surface::LayerStack;

/// Number of pipeline phases; `step` wraps back to 0 after the last.
pub const PHASE_COUNT: usize = 14;

pub struct TerrainGenerator {
    config: GenerationConfig,
    catalogs: CatalogSet,
    grid: Grid,
    layers: LayerStack,
    rng: StdRng,
    phase: usize,
}

impl TerrainGenerator {
    pub fn new(config: GenerationConfig, catalogs: CatalogSet, seed: u64) -> Self {
        let config = config.sanitized();
        let grid = Grid::new(config.grid_length, config.grid_height);
        Self {
            config,
            catalogs,
            grid,
            layers: LayerStack::default(),
            rng: StdRng::seed_from_u64(seed),
            phase: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Index of the next phase `step` will run.
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Run every phase from a clean slate.
    pub fn run_full(&mut self) -> Result<(), GenerationError> {
        self.phase = 0;
        for _ in 0..PHASE_COUNT {
            self.step()?;
        }
        Ok(())
    }

    /// Run the current phase and advance the cursor, wrapping after the
    /// last phase. Returns the index of the phase that ran.
    pub fn step(&mut self) -> Result<usize, GenerationError> {
        let phase = self.phase;
        tracing::debug!(phase, name = phase_name(phase), "running phase");
        match phase {
            0 => {
                self.grid = Grid::new(self.config.grid_length, self.config.grid_height);
                self.layers.reset();
                paint_elevation_tiers(&mut self.grid, &self.config.elevation, &mut self.rng);
                self.fill_debug_ground()?;
            }
            1 => {
                plug_elevation_holes(&mut self.grid, 2);
                self.fill_debug_ground()?;
            }
            2 => {
                plug_elevation_holes(&mut self.grid, 1);
                self.fill_debug_ground()?;
            }
            3 => self.draw_ground_tiles()?,
            4 => draw_cliff_outlines(&self.grid, &mut self.layers, &self.catalogs, 1)?,
            5 => draw_cliff_outlines(&self.grid, &mut self.layers, &self.catalogs, 2)?,
            6 => {
                paint_grass_tiers(&mut self.grid, &self.config.grass, &mut self.rng);
                plug_grass_holes(&mut self.grid, 2);
                plug_grass_holes(&mut self.grid, 1);
                plug_grass_holes(&mut self.grid, 0);
                self.draw_grass_tiles()?;
            }
            7 => draw_grass_outlines(&self.grid, &mut self.layers, &self.catalogs, 0)?,
            8 => draw_grass_outlines(&self.grid, &mut self.layers, &self.catalogs, 1)?,
            9 => draw_grass_outlines(&self.grid, &mut self.layers, &self.catalogs, 2)?,
            10 => scatter_trees(
                &mut self.grid,
                &mut self.layers,
                &self.catalogs.props,
                &self.config.props,
                &mut self.rng,
            ),
            11 => scatter_tall_grass(
                &mut self.grid,
                &mut self.layers,
                &self.catalogs.props,
                &self.config.props,
                &mut self.rng,
            ),
            12 => scatter_rocks(
                &mut self.grid,
                &mut self.layers,
                &self.catalogs.props,
                &self.config.props,
                &mut self.rng,
            ),
            _ => scatter_bushes(
                &mut self.grid,
                &mut self.layers,
                &self.catalogs.props,
                &self.config.props,
                &mut self.rng,
            )?,
        }
        self.phase = (phase + 1) % PHASE_COUNT;
        Ok(phase)
    }

    /// Flat-fill every cell with its elevation tier's first variant so
    /// step-mode previews show the raw tiers before proper tiling.
    fn fill_debug_ground(&mut self) -> Result<(), GenerationError> {
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.length() as i32 {
                let tier = self.grid.elevation(x, y);
                let sheet = match self.catalogs.ground.sheet_for_tier(tier) {
                    Ok(sheet) => sheet,
                    Err(_) => self.catalogs.ground.sheet_for_tier(0)?,
                };
                self.layers.ground.set((x, y), Some(sheet.group_at(0)?.tiles[0]));
            }
        }
        Ok(())
    }

    /// Replace the debug fill with weighted-random ground variants, one
    /// group per macro-cell.
    fn draw_ground_tiles(&mut self) -> Result<(), GenerationError> {
        let anchors: Vec<_> = self.grid.macro_anchors().collect();
        for (x, y) in anchors {
            let tier = self.grid.elevation(x, y);
            let sheet = self.catalogs.ground.sheet_for_tier(tier)?;
            let group = sheet.weighted_random_group(&mut self.rng)?.clone();
            draw_macro(&mut self.layers.ground, (x, y), &group);
        }
        Ok(())
    }

    /// Fill grassy macro-cells on the grass layer matching their elevation
    /// tier and grass kind.
    fn draw_grass_tiles(&mut self) -> Result<(), GenerationError> {
        let anchors: Vec<_> = self.grid.macro_anchors().collect();
        for (x, y) in anchors {
            let grass = self.grid.grass(x, y);
            if grass == 0 {
                continue;
            }
            let tier = self.grid.elevation(x, y);
            let catalog = if grass == 1 {
                &self.catalogs.low_grass
            } else {
                &self.catalogs.high_grass
            };
            let sheet = catalog.sheet_for_tier(tier)?;
            let group = sheet.weighted_random_group(&mut self.rng)?.clone();
            let layer = if grass == 1 {
                &mut self.layers.low_grass[tier as usize]
            } else {
                &mut self.layers.high_grass[tier as usize]
            };
            draw_macro(layer, (x, y), &group);
        }
        Ok(())
    }
}

fn phase_name(phase: usize) -> &'static str {
    match phase {
        0 => "paint elevations",
        1 => "plug elevation holes (tier 2)",
        2 => "plug elevation holes (tier 1)",
        3 => "draw ground tiles",
        4 => "cliff outlines (tier 1)",
        5 => "cliff outlines (tier 2)",
        6 => "paint and draw grass",
        7 => "grass outlines (tier 0)",
        8 => "grass outlines (tier 1)",
        9 => "grass outlines (tier 2)",
        10 => "scatter trees",
        11 => "scatter tall grass",
        12 => "scatter rocks",
        _ => "scatter bushes",
    }
}
