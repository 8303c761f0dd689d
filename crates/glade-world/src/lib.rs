//! Procedural layered 2D terrain generation: elevation tiers, grass overlay,
//! cliff and grass edge resolution, and environment prop scattering over a
//! macro-cell grid.

pub mod cliffs;
pub mod config;
pub mod draw;
mod edge_rules;
pub mod error;
pub mod generator;
pub mod grass_edges;
pub mod grid;
pub mod holes;
pub mod painter;
pub mod props;
pub mod surface;
pub mod walk;

#[cfg(test)]
pub(crate) mod testkit;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use generator::{TerrainGenerator, PHASE_COUNT};
pub use grid::Grid;
pub use surface::{LayerStack, TileLayer};
