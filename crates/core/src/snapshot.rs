//! Snapshot of a game session for rendering and observation.
//!
//! Views consume snapshots rather than live sessions, so the render layer
//! never holds a borrow across input handling.

use crate::session::GameSession;
use crate::types::{GameStatus, Marker, BOARD_CELLS};

/// Cell encoding used in [`GameSnapshot::cells`]: 0 empty, 1 X, 2 O.
pub fn cell_code(cell: Option<Marker>) -> u8 {
    match cell {
        None => 0,
        Some(Marker::X) => 1,
        Some(Marker::O) => 2,
    }
}

/// Inverse of [`cell_code`]; out-of-range codes decode as empty.
pub fn marker_from_code(code: u8) -> Option<Marker> {
    match code {
        1 => Some(Marker::X),
        2 => Some(Marker::O),
        _ => None,
    }
}

/// Self-contained copy of everything a presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Flat board, row-major, encoded via [`cell_code`].
    pub cells: [u8; BOARD_CELLS],
    /// Index of the player to move (frozen once terminal).
    pub active_index: u8,
    pub status: GameStatus,
    pub game_over: bool,
    /// Winning triple indices when `status` is `Won`.
    pub winning_triple: Option<[usize; 3]>,
    /// Display names, player 0 (X) first.
    pub player_names: [String; 2],
}

impl GameSnapshot {
    pub fn of(session: &GameSession) -> Self {
        let mut cells = [0u8; BOARD_CELLS];
        for (code, cell) in cells.iter_mut().zip(session.board().cells()) {
            *code = cell_code(*cell);
        }

        let status = session.status();
        let winning_triple = match status {
            GameStatus::Won(marker) => session.board().winning_triple(marker),
            _ => None,
        };

        Self {
            cells,
            active_index: session.active_index() as u8,
            status,
            game_over: status.is_terminal(),
            winning_triple,
            player_names: [
                session.players()[0].name.clone(),
                session.players()[1].name.clone(),
            ],
        }
    }

    /// Marker at `index`, or `None` for an empty or out-of-range cell
    pub fn marker_at(&self, index: usize) -> Option<Marker> {
        self.cells.get(index).copied().and_then(marker_from_code)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::of(&GameSession::new())
    }
}
