//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! cell cursor, the only piece of input-side state a turn-based game needs.

pub mod cursor;
pub mod map;

pub use tui_tictactoe_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
