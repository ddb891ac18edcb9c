//! Cell cursor for keyboard-driven play.
//!
//! The cursor is presentation-side state: it tracks which of the nine
//! cells is highlighted and moves in grid steps, clamped at the edges.
//! It never enters the game core; selection hands its index to the
//! presentation adapter as a plain `CellSelected` event.

use crate::types::{BOARD_CELLS, BOARD_SIDE};

/// Highlighted cell on the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Start at the center cell
    pub fn new() -> Self {
        Self { index: 4 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / BOARD_SIDE
    }

    pub fn col(&self) -> usize {
        self.index % BOARD_SIDE
    }

    /// Jump to a cell; out-of-range indices are ignored
    pub fn set(&mut self, index: usize) {
        if index < BOARD_CELLS {
            self.index = index;
        }
    }

    pub fn move_up(&mut self) {
        if self.row() > 0 {
            self.index -= BOARD_SIDE;
        }
    }

    pub fn move_down(&mut self) {
        if self.row() + 1 < BOARD_SIDE {
            self.index += BOARD_SIDE;
        }
    }

    pub fn move_left(&mut self) {
        if self.col() > 0 {
            self.index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.col() + 1 < BOARD_SIDE {
            self.index += 1;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
