//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management for two-player
//! tic-tac-toe. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 3x3 grid with single-write-per-cell enforcement
//! - [`session`]: turn order, win/tie detection, and move rejection
//! - [`snapshot`]: self-contained state copies for the render layer
//!
//! # Game Rules
//!
//! - Player 0 plays X and always moves first; player 1 plays O.
//! - A mark on an empty cell sticks and passes the turn; a mark on an
//!   occupied cell (or out of range) is silently rejected and the turn
//!   stays put.
//! - A move completing any of the 8 winning triples ends the game as a win
//!   for the mover; a ninth mark with no triple ends it as a tie.
//! - Once the game has ended every further move is ignored until the
//!   session is started again.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameSession;
//! use tui_tictactoe_types::{GameStatus, Marker, RoundOutcome};
//!
//! let mut session = GameSession::new();
//! session.start("Alice", "Bob");
//!
//! // Alice takes the top row while Bob plays elsewhere.
//! for index in [0, 3, 1, 4, 2] {
//!     assert_eq!(session.play_round(index), RoundOutcome::Placed);
//! }
//!
//! assert_eq!(session.status(), GameStatus::Won(Marker::X));
//! assert_eq!(session.result_message(), "Alice wins!");
//! ```

pub mod board;
pub mod session;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use session::GameSession;
pub use snapshot::{cell_code, marker_from_code, GameSnapshot};
