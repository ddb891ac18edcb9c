//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored flat, indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! - **Rows**: 0-2, 3-5, 6-8
//! - **Columns**: 0/3/6, 1/4/7, 2/5/8
//! - **Diagonals**: 0/4/8, 2/4/6
//!
//! A game is won when any of the [`WIN_TRIPLES`] is uniformly occupied by
//! one marker; it is tied when all nine cells are occupied and no triple is.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{GameAction, Marker, BOARD_CELLS, WIN_TRIPLES};
//!
//! // Two distinct markers, each the other's opponent.
//! assert_eq!(Marker::X.opponent(), Marker::O);
//! assert_eq!(Marker::from_str("o"), Some(Marker::O));
//!
//! // Parse a UI action (camelCase string form).
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Board dimensions.
//! assert_eq!(BOARD_CELLS, 9);
//! assert_eq!(WIN_TRIPLES.len(), 8);
//! ```

/// Number of cells on the board (3x3)
pub const BOARD_CELLS: usize = 9;

/// Board side length in cells
pub const BOARD_SIDE: usize = 3;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals
///
/// Each triple lists flat cell indices in ascending order. A player wins
/// when all three cells of any triple hold that player's marker.
pub const WIN_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Default name for the first player (used on restart and blank input)
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Default name for the second player (used on restart and blank input)
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// The two cell markers
///
/// Player 0 always plays `X` and moves first; player 1 plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The other marker
    pub fn opponent(&self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Glyph drawn on the board
    pub fn as_char(&self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Parse marker from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Marker;
    ///
    /// assert_eq!(Marker::from_str("x"), Some(Marker::X));
    /// assert_eq!(Marker::from_str("O"), Some(Marker::O));
    /// assert_eq!(Marker::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Marker::X),
            "o" => Some(Marker::O),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::X => "x",
            Marker::O => "o",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty cell
/// - `Some(Marker)`: cell occupied by the given marker
///
/// Used by the board as a flat array of cells.
pub type Cell = Option<Marker>;

/// A player identity: display name plus the marker they place
///
/// Exactly two players exist per game session, created at game start and
/// immutable for the session's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

/// Session status: exactly one variant holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted; the active player alternates on placement.
    InProgress,
    /// The given marker completed a winning triple. No further moves.
    Won(Marker),
    /// All nine cells occupied with no winning triple. No further moves.
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied`; no further moves are accepted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a single `play_round` attempt
///
/// Occupied cells and moves after game end are ordinary gameplay outcomes,
/// not errors, so they are signaled rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Mark placed; the board changed and termination was evaluated.
    Placed,
    /// Cell occupied or index out of range; nothing changed.
    Rejected,
    /// Game already over; input ignored entirely.
    Ignored,
}

/// UI-level actions produced by the input layer
///
/// Cursor movement stays in the presentation layer; only `Select`,
/// `SelectCell`, `Start`, and `Restart` reach the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cell cursor up one row
    MoveUp,
    /// Move the cell cursor down one row
    MoveDown,
    /// Move the cell cursor left one column
    MoveLeft,
    /// Move the cell cursor right one column
    MoveRight,
    /// Place a mark at the cursor's cell
    Select,
    /// Place a mark at a specific cell (direct digit selection)
    SelectCell(usize),
    /// Start a new game with the configured player names
    Start,
    /// Restart with the default player names
    Restart,
}

impl GameAction {
    /// Parse action from camelCase string
    ///
    /// Direct cell selection parses as `"cell0"` through `"cell8"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("cell4"), Some(GameAction::SelectCell(4)));
    /// assert_eq!(GameAction::from_str("cell9"), None);
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(digit) = lower.strip_prefix("cell") {
            let index: usize = digit.parse().ok()?;
            if index < BOARD_CELLS {
                return Some(GameAction::SelectCell(index));
            }
            return None;
        }
        match lower.as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "select" => Some(GameAction::Select),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string (inverse of [`GameAction::from_str`],
    /// except `SelectCell` which renders as `"select"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Select | GameAction::SelectCell(_) => "select",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}
