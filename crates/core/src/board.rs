//! Board module - manages the 3x3 game grid
//!
//! The board is a flat array of nine cells, each empty or holding a marker.
//! Cells are indexed 0-8 in row-major order (see the types crate docs).
//! The board knows nothing about players or turns; its one rule is
//! single-write-per-cell: an occupied cell can only become empty again
//! through a full reset.

use arrayvec::ArrayVec;

use crate::types::{Cell, Marker, BOARD_CELLS, WIN_TRIPLES};

/// The game board - nine cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Place a marker on an empty cell
    ///
    /// Returns true and mutates the cell iff `index` is in range and the
    /// cell is empty. An occupied cell or an out-of-range index leaves the
    /// board untouched and returns false; both are ordinary gameplay
    /// outcomes, not errors.
    pub fn set_mark(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(marker);
                true
            }
            _ => false,
        }
    }

    /// Get cell at `index`
    ///
    /// Returns `None` when out of range, `Some(None)` for an empty cell.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Read-only view of all nine cells in index order
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Set all cells back to empty. Idempotent.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// First winning triple uniformly holding `marker`, if any
    ///
    /// Scans the 8 fixed triples in rows, columns, diagonals order. The
    /// returned indices let callers highlight the winning line.
    pub fn winning_triple(&self, marker: Marker) -> Option<[usize; 3]> {
        WIN_TRIPLES
            .iter()
            .find(|triple| triple.iter().all(|&i| self.cells[i] == Some(marker)))
            .copied()
    }

    /// True when `marker` holds any winning triple
    pub fn has_win(&self, marker: Marker) -> bool {
        self.winning_triple(marker).is_some()
    }

    /// Indices of all empty cells, in ascending order
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
