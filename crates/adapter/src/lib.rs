//! Adapter module - wires user events to the game core
//!
//! This crate is the presentation adapter: the only layer allowed to drive
//! the game session. It turns user-initiated [`UiEvent`]s into session
//! calls and pushes results out through the [`Presenter`] observer
//! contract, keeping the core free of any display-surface dependency.
//!
//! # Event Flow
//!
//! ```text
//! input event -> UiEvent -> GameController -> GameSession
//!                                |
//!                                +-> Presenter::render (board changed)
//!                                +-> Presenter::set_result (game ended / cleared)
//! ```
//!
//! Rejected moves (occupied cell, out-of-range index) and moves after game
//! end trigger **no** notification: silently swallowing them is part of
//! the game's contract, not an error path.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_adapter::{GameController, Presenter, UiEvent};
//! use tui_tictactoe_core::GameSnapshot;
//!
//! #[derive(Default)]
//! struct Counting {
//!     renders: usize,
//!     results: Vec<String>,
//! }
//!
//! impl Presenter for Counting {
//!     fn render(&mut self, _snapshot: &GameSnapshot) {
//!         self.renders += 1;
//!     }
//!     fn set_result(&mut self, message: &str) {
//!         self.results.push(message.to_string());
//!     }
//! }
//!
//! let mut controller = GameController::new(Counting::default());
//! controller.handle(UiEvent::start(Some("Alice"), None));
//! controller.handle(UiEvent::CellSelected(4));
//! controller.handle(UiEvent::CellSelected(4)); // occupied: no render
//!
//! assert_eq!(controller.presenter().renders, 2);
//! assert_eq!(controller.presenter().results, vec![String::new()]);
//! ```

pub mod controller;
pub mod event;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use controller::{GameController, Presenter};
pub use event::UiEvent;
