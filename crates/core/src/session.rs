//! Game session module - turn order and terminal-state detection
//!
//! A [`GameSession`] owns the board, both player identities, the active
//! player index, and the session status. It is an explicitly owned object:
//! callers create as many independent sessions as they need and nothing is
//! shared globally. All moves flow through [`GameSession::play_round`],
//! which silently rejects occupied cells and ignores input once the game
//! has ended.

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameStatus, Marker, Player, RoundOutcome, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO,
};

/// One game of tic-tac-toe: two players, a board, and whose turn it is
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Player 0 plays X and moves first; player 1 plays O.
    players: [Player; 2],
    /// Index of the player to move next (0 or 1).
    current: usize,
    status: GameStatus,
    board: Board,
}

impl GameSession {
    /// Create a session with the default player names, ready to play
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(DEFAULT_PLAYER_ONE, Marker::X),
                Player::new(DEFAULT_PLAYER_TWO, Marker::O),
            ],
            current: 0,
            status: GameStatus::InProgress,
            board: Board::new(),
        }
    }

    /// Start (or re-start) a game with the given player names
    ///
    /// Blank names (empty after trimming) fall back to the defaults.
    /// Resets the board in place, hands the first move to player 0, and
    /// puts the session back in progress.
    pub fn start(&mut self, name_one: &str, name_two: &str) {
        self.players = [
            Player::new(or_default(name_one, DEFAULT_PLAYER_ONE), Marker::X),
            Player::new(or_default(name_two, DEFAULT_PLAYER_TWO), Marker::O),
        ];
        self.current = 0;
        self.status = GameStatus::InProgress;
        self.board.reset();
    }

    /// Restart with the fixed default names, regardless of prior names
    pub fn restart(&mut self) {
        self.start(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO);
    }

    /// Attempt one move at `index` for the active player
    ///
    /// - Terminal session: [`RoundOutcome::Ignored`], nothing changes.
    /// - Occupied cell or out-of-range index: [`RoundOutcome::Rejected`],
    ///   board and turn unchanged.
    /// - Otherwise the mark is placed and termination is evaluated: a
    ///   completed triple wins for the mover; a full board with no win is
    ///   a tie; else the turn passes to the other player.
    ///
    /// The tie check only runs after the win check: a full board
    /// containing a winning triple is a win, never a tie.
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        if self.status.is_terminal() {
            return RoundOutcome::Ignored;
        }

        let marker = self.players[self.current].marker;
        if !self.board.set_mark(index, marker) {
            return RoundOutcome::Rejected;
        }

        if self.board.has_win(marker) {
            self.status = GameStatus::Won(marker);
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.current = 1 - self.current;
        }
        RoundOutcome::Placed
    }

    /// Human-readable result line
    ///
    /// Empty while in progress, `"{name} wins!"` after a win,
    /// `"It's a tie!"` after a tie.
    pub fn result_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(marker) => format!("{} wins!", self.player_with(marker).name),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    /// The player owning `marker`
    pub fn player_with(&self, marker: Marker) -> &Player {
        if self.players[0].marker == marker {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player to move next; frozen once the game ends
    pub fn active_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Self-contained copy of everything a view needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn or_default<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
