//! Terminal tic-tac-toe runner.
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer (no ratatui widgets/layout). The loop is
//! strictly synchronous: draw, block on the next key event, handle it to
//! completion, repeat.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::adapter::{GameController, Presenter, UiEvent};
use tui_tictactoe::core::GameSnapshot;
use tui_tictactoe::input::{handle_key_event, should_quit, Cursor};
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

/// Two-player terminal tic-tac-toe.
#[derive(Debug, Parser)]
#[command(name = "tui-tictactoe", version, about)]
struct Args {
    /// Name of the first player (plays X, moves first)
    #[arg(long)]
    player_one: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long)]
    player_two: Option<String>,
}

/// Terminal-side observer: remembers the latest notifications and whether
/// anything changed since the last flush to the screen.
#[derive(Default)]
struct TermPresenter {
    snapshot: GameSnapshot,
    result: String,
    dirty: bool,
}

impl TermPresenter {
    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Presenter for TermPresenter {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.snapshot = snapshot.clone();
        self.dirty = true;
    }

    fn set_result(&mut self, message: &str) {
        self.result = message.to_string();
        self.dirty = true;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let view = GameView::from_env();
    let mut cursor = Cursor::new();
    let mut controller = GameController::new(TermPresenter::default());

    // Initialize a default game before the first draw.
    controller.handle(UiEvent::start(
        args.player_one.as_deref(),
        args.player_two.as_deref(),
    ));

    let mut needs_draw = true;
    loop {
        if needs_draw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let presenter = controller.presenter();
            let fb = view.render(
                &presenter.snapshot,
                Some(cursor.index()),
                &presenter.result,
                Viewport::new(w, h),
            );
            term.draw(&fb)?;
            needs_draw = false;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    match action {
                        // Cursor moves live outside the presenter contract;
                        // flag the redraw directly.
                        GameAction::MoveUp => {
                            cursor.move_up();
                            needs_draw = true;
                        }
                        GameAction::MoveDown => {
                            cursor.move_down();
                            needs_draw = true;
                        }
                        GameAction::MoveLeft => {
                            cursor.move_left();
                            needs_draw = true;
                        }
                        GameAction::MoveRight => {
                            cursor.move_right();
                            needs_draw = true;
                        }
                        GameAction::Select => {
                            controller.handle(UiEvent::CellSelected(cursor.index()));
                        }
                        GameAction::SelectCell(index) => {
                            cursor.set(index);
                            needs_draw = true;
                            controller.handle(UiEvent::CellSelected(index));
                        }
                        GameAction::Start => {
                            cursor = Cursor::new();
                            controller.handle(UiEvent::start(
                                args.player_one.as_deref(),
                                args.player_two.as_deref(),
                            ));
                        }
                        GameAction::Restart => {
                            cursor = Cursor::new();
                            controller.handle(UiEvent::Restart);
                        }
                    }
                }
                if controller.presenter_mut().take_dirty() {
                    needs_draw = true;
                }
            }
            Event::Resize(_, _) => {
                needs_draw = true;
            }
            _ => {}
        }
    }
}
