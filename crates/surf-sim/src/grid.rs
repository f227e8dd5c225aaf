use serde::{Deserialize, Serialize};

/// Dense rectangular boolean grid, row-major.
///
/// Used for the geometry-shaped output form, where stabilizer values sit at
/// their lattice coordinates and dummy cells stay `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Creates an all-false grid with the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at row `m`, column `n`. Panics when out of range.
    pub fn get(&self, m: usize, n: usize) -> bool {
        assert!(m < self.rows && n < self.cols, "cell out of range");
        self.cells[m * self.cols + n]
    }

    /// Sets the value at row `m`, column `n`. Panics when out of range.
    pub fn set(&mut self, m: usize, n: usize, value: bool) {
        assert!(m < self.rows && n < self.cols, "cell out of range");
        self.cells[m * self.cols + n] = value;
    }

    /// Row-major flat view of the cells.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// True when every cell is false.
    pub fn is_all_false(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}
