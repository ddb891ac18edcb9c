//! Controller: session ownership plus the observer contract.

use crate::core::{GameSession, GameSnapshot};
use crate::event::UiEvent;
use crate::types::RoundOutcome;

/// Observer contract for the display surface
///
/// `render` fires whenever the board (or player roster) changed;
/// `set_result` fires with the result line when the game ends and with an
/// empty string when a new game clears it. Implementations must not call
/// back into the controller.
pub trait Presenter {
    fn render(&mut self, snapshot: &GameSnapshot);
    fn set_result(&mut self, message: &str);
}

/// Owns one [`GameSession`] and a presenter, and mediates between them
///
/// All user input funnels through [`GameController::handle`]; the
/// presenter only ever observes, it never mutates game state.
pub struct GameController<P: Presenter> {
    session: GameSession,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Create a controller around a fresh default session
    ///
    /// No notification fires until the first event; callers normally
    /// dispatch a `Start` event right away.
    pub fn new(presenter: P) -> Self {
        Self {
            session: GameSession::new(),
            presenter,
        }
    }

    /// Dispatch one user event to completion
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Start {
                player_one,
                player_two,
            } => {
                self.session.start(
                    player_one.as_deref().unwrap_or(""),
                    player_two.as_deref().unwrap_or(""),
                );
                self.notify_reset();
            }
            UiEvent::Restart => {
                self.session.restart();
                self.notify_reset();
            }
            UiEvent::CellSelected(index) => {
                if self.session.play_round(index) == RoundOutcome::Placed {
                    // Render first, then the result line, matching the
                    // order the board and message update on screen.
                    self.presenter.render(&self.session.snapshot());
                    if self.session.status().is_terminal() {
                        self.presenter.set_result(&self.session.result_message());
                    }
                }
            }
        }
    }

    fn notify_reset(&mut self) {
        self.presenter.render(&self.session.snapshot());
        self.presenter.set_result("");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
