use rand::Rng;

use crate::simulation::cell::{CellState, ALIVE, DEAD};

/// Fixed-size row-major cell buffer.
///
/// Addressed as `(x, y)` with `x` the row in `0..height` and `y` the column
/// in `0..width`. Out-of-range access is a caller bug and panics; there is no
/// recoverable error path and the grid never wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn dead(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![DEAD; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.height && y < self.width,
            "cell ({x}, {y}) outside {}x{} grid",
            self.height,
            self.width
        );
        x * self.width + y
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Set every cell to alive or dead with equal probability.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = if rng.gen::<bool>() { ALIVE } else { DEAD };
        }
    }

    /// Number of fully alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }
}
