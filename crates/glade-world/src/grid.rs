//! The terrain grid: one cell per coordinate, painted in 2x2 macro-cells.

/// Smallest grid side the generator accepts.
pub const MIN_GRID_DIM: usize = 50;
/// Largest grid side the generator accepts.
pub const MAX_GRID_DIM: usize = 400;

/// Per-coordinate generation state. Elevation and grass tiers are uniform
/// across a macro-cell because every write goes through the macro setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub elevation: u8,
    pub grass: u8,
    pub prop: bool,
}

/// Flat row-major grid of cells. Macro-cells are 2x2 blocks anchored at even
/// `(x, y)`; all painting and neighbor queries step in units of 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    length: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a fresh zeroed grid. Dimensions are clamped into
    /// `MIN_GRID_DIM..=MAX_GRID_DIM` and rounded down to even.
    pub fn new(length: usize, height: usize) -> Self {
        let length = clamp_dim(length);
        let height = clamp_dim(height);
        Self {
            length,
            height,
            cells: vec![Cell::default(); length * height],
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.length * self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.length && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y));
        y as usize * self.length + x as usize
    }

    pub fn cell(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    pub fn elevation(&self, x: i32, y: i32) -> u8 {
        self.cell(x, y).elevation
    }

    pub fn grass(&self, x: i32, y: i32) -> u8 {
        self.cell(x, y).grass
    }

    /// The in-bounds macro-cell anchors two units away on each axis,
    /// ordered right, up, left, down.
    pub fn macro_neighbors(&self, x: i32, y: i32) -> Vec<(i32, i32)> {
        [(x + 2, y), (x, y + 2), (x - 2, y), (x, y - 2)]
            .into_iter()
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .collect()
    }

    /// Iterate every macro-cell anchor (even coordinates only), column-major
    /// like the painting loops.
    pub fn macro_anchors(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (length, height) = (self.length as i32, self.height as i32);
        (0..length)
            .step_by(2)
            .flat_map(move |x| (0..height).step_by(2).map(move |y| (x, y)))
    }

    /// Paint the macro-cell anchored at `(x, y)` to `elevation`, clamping the
    /// far cells at the grid edge. Returns `false` when the anchor already
    /// had that tier; such no-op writes do not count against walk budgets.
    pub fn set_macro_elevation(&mut self, x: i32, y: i32, elevation: u8) -> bool {
        if self.cell(x, y).elevation == elevation {
            return false;
        }
        for (cx, cy) in macro_cells(x, y) {
            if self.in_bounds(cx, cy) {
                self.cell_mut(cx, cy).elevation = elevation;
            }
        }
        true
    }

    /// Grass counterpart of [`Grid::set_macro_elevation`].
    pub fn set_macro_grass(&mut self, x: i32, y: i32, grass: u8) -> bool {
        if self.cell(x, y).grass == grass {
            return false;
        }
        for (cx, cy) in macro_cells(x, y) {
            if self.in_bounds(cx, cy) {
                self.cell_mut(cx, cy).grass = grass;
            }
        }
        true
    }
}

fn clamp_dim(dim: usize) -> usize {
    let dim = dim.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
    dim - dim % 2
}

/// The four cell coordinates of the macro-cell anchored at `(x, y)`.
pub fn macro_cells(x: i32, y: i32) -> [(i32, i32); 4] {
    [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
}
