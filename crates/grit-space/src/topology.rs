//! Precomputed Moore-neighborhood table.

use crate::direction::Direction;
use crate::error::SpaceError;
use smallvec::SmallVec;

/// Sentinel entry meaning "no neighbor in that direction".
///
/// Stored in the table for every lookup that would land outside the
/// grid; surfaced to callers as `None`.
pub const NO_NEIGHBOR: u32 = u32::MAX;

/// The 8 Moore-neighborhood indices of every cell, precomputed once
/// per grid geometry.
///
/// Cells are addressed row-major: `index = row * cols + col`, with
/// row 0 at the top. Each table entry holds 8 neighbor indices in
/// [`Direction::ALL`] order, with [`NO_NEIGHBOR`] marking directions
/// that fall outside `[0, rows) × [0, cols)`.
///
/// The table is immutable after construction; a resized grid needs a
/// new topology.
#[derive(Debug, Clone)]
pub struct NeighborTopology {
    rows: usize,
    cols: usize,
    table: Vec<[u32; 8]>,
}

impl NeighborTopology {
    /// Largest supported cell count. Indices are stored as `u32` with
    /// the top value reserved for the sentinel.
    pub const MAX_CELLS: usize = (u32::MAX - 1) as usize;

    /// Build the neighbor table for a `rows × cols` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// or `Err(SpaceError::DimensionTooLarge)` if the cell count would
    /// not fit the `u32` index space.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_CELLS {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_CELLS,
            });
        }
        if cols > Self::MAX_CELLS {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_CELLS,
            });
        }
        let cells = match rows.checked_mul(cols) {
            Some(n) if n <= Self::MAX_CELLS => n,
            _ => {
                return Err(SpaceError::DimensionTooLarge {
                    name: "rows * cols",
                    value: rows,
                    max: Self::MAX_CELLS,
                });
            }
        };

        let mut table = Vec::with_capacity(cells);
        for r in 0..rows {
            for c in 0..cols {
                let mut entry = [NO_NEIGHBOR; 8];
                for (slot, dir) in Direction::ALL.iter().enumerate() {
                    let (dr, dc) = dir.offset();
                    let nr = r as i64 + dr as i64;
                    let nc = c as i64 + dc as i64;
                    if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                        entry[slot] = (nr as usize * cols + nc as usize) as u32;
                    }
                }
                table.push(entry);
            }
        }

        Ok(Self { rows, cols, table })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.table.len()
    }

    /// Row-major index of `(row, col)`. Callers must pass in-bounds
    /// coordinates.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// `(row, col)` of a row-major index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// The neighbor of `index` in `direction`, or `None` at the grid
    /// boundary. O(1); never panics for `index < cell_count()`.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        match self.table[index][direction as usize] {
            NO_NEIGHBOR => None,
            n => Some(n as usize),
        }
    }

    /// All in-bounds neighbors of `index`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, index: usize) -> SmallVec<[usize; 8]> {
        self.table[index]
            .iter()
            .filter(|&&n| n != NO_NEIGHBOR)
            .map(|&n| n as usize)
            .collect()
    }
}
