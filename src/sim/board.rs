//! Grid/board model
//!
//! The discrete coordinate space the snake moves in. Cells are addressed by
//! signed coordinates so a head that steps off the edge is still representable
//! and can be rejected by [`Board::contains`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// A cell coordinate on the board (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by a (dx, dy) step
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another cell
    pub fn manhattan(self, other: Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Fixed-size board bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True iff the cell lies inside the board
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// Pick a uniformly random cell that is not in `excluded`.
    ///
    /// Free cells are enumerated first, so this always terminates. Returns
    /// `None` when every cell is excluded (the snake fills the board).
    pub fn random_free_cell<R>(&self, excluded: &HashSet<Cell>, rng: &mut R) -> Option<Cell>
    where
        R: RandomSource + ?Sized,
    {
        let free: Vec<Cell> = self.cells().filter(|c| !excluded.contains(c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.pick_index(free.len())])
    }
}
