//! The chunk-walk primitive shared by every painting pass.
//!
//! A walk starts at a random macro-cell, paints, and after each placement
//! either restarts somewhere new (with the pass's restart chance) or steps
//! to a nearby macro-cell. Two stepping policies exist: exact cardinal steps
//! for tier painting and free offsets for prop scattering.

use rand::Rng;

use crate::grid::Grid;

/// Roll a random in-bounds macro-cell anchor.
///
/// The `(dim - 1) / 2` upper bound never selects the last macro column or
/// row as a walk origin; walks still reach them by stepping.
pub fn random_macro_origin<R: Rng>(rng: &mut R, grid: &Grid) -> (i32, i32) {
    let x = rng.gen_range(0..(grid.length() as i32 - 1) / 2) * 2;
    let y = rng.gen_range(0..(grid.height() as i32 - 1) / 2) * 2;
    (x, y)
}

/// Step to a neighbor at exactly `(dx, dy)` along one random cardinal
/// direction, rotating through the four directions until one stays in
/// bounds. The grid is at least 50 wide so a legal direction always exists.
pub fn step_cardinal<R: Rng>(
    rng: &mut R,
    (x, y): (i32, i32),
    dx: i32,
    dy: i32,
    grid: &Grid,
) -> (i32, i32) {
    let mut direction = rng.gen_range(0..4u8);
    loop {
        let next = match direction {
            0 => (x + dx, y),
            1 => (x, y - dy),
            2 => (x - dx, y),
            _ => (x, y + dy),
        };
        if grid.in_bounds(next.0, next.1) {
            return next;
        }
        direction = (direction + 1) % 4;
    }
}

/// Step by a uniformly random offset within `[-dx-1, dx) x [-dy-1, dy)`,
/// resampling until the result is in bounds.
pub fn step_free<R: Rng>(
    rng: &mut R,
    (x, y): (i32, i32),
    dx: i32,
    dy: i32,
    grid: &Grid,
) -> (i32, i32) {
    loop {
        let next = (
            x + rng.gen_range(-dx - 1..dx),
            y + rng.gen_range(-dy - 1..dy),
        );
        if grid.in_bounds(next.0, next.1) {
            return next;
        }
    }
}
