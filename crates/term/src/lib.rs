//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` pure and testable
//! - Keep the view a pure snapshot-to-framebuffer mapping
//! - Redraw per input event; no frame timing, no diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
