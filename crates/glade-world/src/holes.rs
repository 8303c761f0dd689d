//! Hole plugging: cascade-repaints isolated macro-cells after a painting
//! pass so the terrain has no single-cell outliers.
//!
//! For every macro-cell not matching the target tier: if any axis-neighbor
//! matches the target, count the neighbors matching the cell's *own* tier.
//! Fewer than two means the cell is an outlier; it gets repainted to the
//! target, and if it had exactly one same-tier neighbor the cut propagates
//! there. Two or more same-tier neighbors stop the cascade so no new
//! islands are created. Callers run tiers from highest to lowest.

use crate::grid::Grid;

/// Plug elevation holes toward `tier`.
pub fn plug_elevation_holes(grid: &mut Grid, tier: u8) {
    let anchors: Vec<_> = grid.macro_anchors().collect();
    for (x, y) in anchors {
        if grid.elevation(x, y) == tier {
            continue;
        }
        if !grid
            .macro_neighbors(x, y)
            .iter()
            .any(|&(nx, ny)| grid.elevation(nx, ny) == tier)
        {
            continue;
        }

        let mut target = (x, y);
        loop {
            let own = grid.elevation(target.0, target.1);
            let matches: Vec<_> = grid
                .macro_neighbors(target.0, target.1)
                .into_iter()
                .filter(|&(nx, ny)| grid.elevation(nx, ny) == own)
                .collect();

            if matches.len() >= 2 {
                break;
            }
            grid.set_macro_elevation(target.0, target.1, tier);
            match matches.first() {
                Some(&next) if matches.len() == 1 => target = next,
                _ => break,
            }
        }
    }
}

/// Plug grass holes toward `tier`. Grass continuity only counts within the
/// same elevation tier, so neighbor matching also requires equal elevation.
pub fn plug_grass_holes(grid: &mut Grid, tier: u8) {
    let anchors: Vec<_> = grid.macro_anchors().collect();
    for (x, y) in anchors {
        if grid.grass(x, y) == tier {
            continue;
        }
        if !grid
            .macro_neighbors(x, y)
            .iter()
            .any(|&(nx, ny)| grid.grass(nx, ny) == tier)
        {
            continue;
        }

        let mut target = (x, y);
        loop {
            let own_grass = grid.grass(target.0, target.1);
            let own_elevation = grid.elevation(target.0, target.1);
            let matches: Vec<_> = grid
                .macro_neighbors(target.0, target.1)
                .into_iter()
                .filter(|&(nx, ny)| {
                    grid.grass(nx, ny) == own_grass && grid.elevation(nx, ny) == own_elevation
                })
                .collect();

            if matches.len() >= 2 {
                break;
            }
            grid.set_macro_grass(target.0, target.1, tier);
            match matches.first() {
                Some(&next) if matches.len() == 1 => target = next,
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ElevationConfig;
    use crate::painter::paint_elevation_tiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fill_elevation(grid: &mut Grid, tier: u8) {
        let anchors: Vec<_> = grid.macro_anchors().collect();
        for (x, y) in anchors {
            grid.set_macro_elevation(x, y, tier);
        }
    }

    #[test]
    fn isolated_outlier_is_repainted() {
        let mut grid = Grid::new(50, 50);
        fill_elevation(&mut grid, 2);
        // Carve a single tier-0 macro-cell in the middle of a tier-2 sea.
        grid.set_macro_elevation(24, 24, 0);
        plug_elevation_holes(&mut grid, 2);
        assert_eq!(grid.elevation(24, 24), 2);
        assert_eq!(grid.elevation(25, 25), 2);
    }

    #[test]
    fn one_wide_corridor_cascades() {
        let mut grid = Grid::new(50, 50);
        fill_elevation(&mut grid, 2);
        // A 1-macro-wide tier-0 corridor: each link has at most one same-tier
        // neighbor, so the cut should propagate down the whole corridor.
        grid.set_macro_elevation(20, 24, 0);
        grid.set_macro_elevation(22, 24, 0);
        grid.set_macro_elevation(24, 24, 0);
        plug_elevation_holes(&mut grid, 2);
        assert_eq!(grid.elevation(20, 24), 2);
        assert_eq!(grid.elevation(22, 24), 2);
        assert_eq!(grid.elevation(24, 24), 2);
    }

    #[test]
    fn blobs_with_two_matching_neighbors_survive() {
        let mut grid = Grid::new(50, 50);
        fill_elevation(&mut grid, 2);
        // A 2x2 macro-cell block of tier 0: every member keeps two same-tier
        // axis neighbors, so nothing is repainted.
        for &(x, y) in &[(20, 20), (22, 20), (20, 22), (22, 22)] {
            grid.set_macro_elevation(x, y, 0);
        }
        plug_elevation_holes(&mut grid, 2);
        for &(x, y) in &[(20, 20), (22, 20), (20, 22), (22, 22)] {
            assert_eq!(grid.elevation(x, y), 0);
        }
    }

    #[test]
    fn untouched_region_without_target_neighbors_is_skipped() {
        let mut grid = Grid::new(50, 50);
        // All tier 0; a tier-2 region far away should not cause distant
        // repaints because the outlier check requires an adjacent target.
        grid.set_macro_elevation(0, 0, 2);
        plug_elevation_holes(&mut grid, 2);
        assert_eq!(grid.elevation(24, 24), 0);
        // The lone tier-2 cell itself matches the target and is kept.
        assert_eq!(grid.elevation(0, 0), 2);
    }

    #[test]
    fn seeded_grid_has_no_single_neighbor_outliers_after_plugging() {
        let mut grid = Grid::new(50, 50);
        let mut rng = StdRng::seed_from_u64(42);
        paint_elevation_tiers(&mut grid, &ElevationConfig::default(), &mut rng);
        // Full descending sequence: the tier-0 pass is what removes thin
        // protrusion endpoints left by the chunk walks.
        plug_elevation_holes(&mut grid, 2);
        plug_elevation_holes(&mut grid, 1);
        plug_elevation_holes(&mut grid, 0);

        // Exhaustive scan: no interior macro-cell may end up with exactly
        // one same-tier axis neighbor. Border cells have truncated
        // neighborhoods and are exempt, as are fully isolated cells.
        for (x, y) in grid.macro_anchors().collect::<Vec<_>>() {
            let neighbors = grid.macro_neighbors(x, y);
            if neighbors.len() < 4 {
                continue;
            }
            let own = grid.elevation(x, y);
            let matches = neighbors
                .iter()
                .filter(|&&(nx, ny)| grid.elevation(nx, ny) == own)
                .count();
            assert_ne!(matches, 1, "outlier macro-cell at ({x},{y}) tier {own}");
        }
    }

    #[test]
    fn grass_matching_requires_equal_elevation() {
        let mut grid = Grid::new(50, 50);
        // Grass tier 1 everywhere.
        let anchors: Vec<_> = grid.macro_anchors().collect();
        for (x, y) in anchors {
            grid.set_macro_grass(x, y, 1);
        }
        // One grass-0 macro-cell whose sole grass-0 "ally" sits across an
        // elevation boundary, so it does not count as a matching neighbor
        // and the hole still gets plugged.
        grid.set_macro_grass(24, 24, 0);
        grid.set_macro_grass(26, 24, 0);
        grid.set_macro_elevation(26, 24, 1);
        plug_grass_holes(&mut grid, 1);
        assert_eq!(grid.grass(24, 24), 1);
    }
}
