//! Session tests - turn order, termination, and the gameplay scenarios.

use tui_tictactoe::core::GameSession;
use tui_tictactoe::types::{
    GameStatus, Marker, RoundOutcome, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, WIN_TRIPLES,
};

/// Moves producing a tie: X takes 0,2,3,7,8 and O takes 1,4,5,6 without
/// either completing a triple along the way.
const TIE_SEQUENCE: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

#[test]
fn test_start_produces_in_progress_player_zero() {
    let mut session = GameSession::new();
    session.start("Alice", "Bob");

    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.active_index(), 0);
    assert_eq!(session.current_player().name, "Alice");
    assert_eq!(session.current_player().marker, Marker::X);
    assert_eq!(session.result_message(), "");
}

#[test]
fn test_markers_are_distinct_and_fixed() {
    let mut session = GameSession::new();
    session.start("Alice", "Bob");
    let [one, two] = session.players().clone();
    assert_eq!(one.marker, Marker::X);
    assert_eq!(two.marker, Marker::O);
    assert_ne!(one.marker, two.marker);
}

#[test]
fn test_board_reflects_exactly_the_marks_placed() {
    let mut session = GameSession::new();
    for index in [4, 0, 8] {
        assert_eq!(session.play_round(index), RoundOutcome::Placed);
    }

    let board = session.board();
    assert_eq!(board.get(4), Some(Some(Marker::X)));
    assert_eq!(board.get(0), Some(Some(Marker::O)));
    assert_eq!(board.get(8), Some(Some(Marker::X)));
    assert_eq!(board.empty_cells().len(), 6);
}

#[test]
fn test_scenario_alice_wins_top_row() {
    let mut session = GameSession::new();
    session.start("Alice", "Bob");

    // Alice: 0, 1, 2; Bob: 3, 4 in between.
    for index in [0, 3, 1, 4, 2] {
        assert_eq!(session.play_round(index), RoundOutcome::Placed);
    }

    assert_eq!(session.status(), GameStatus::Won(Marker::X));
    assert_eq!(session.result_message(), "Alice wins!");
}

#[test]
fn test_scenario_tie() {
    let mut session = GameSession::new();
    for index in TIE_SEQUENCE {
        assert_eq!(session.play_round(index), RoundOutcome::Placed);
    }

    assert_eq!(session.status(), GameStatus::Tied);
    assert_eq!(session.result_message(), "It's a tie!");
    assert!(session.board().is_full());
}

#[test]
fn test_scenario_double_play_same_cell() {
    let mut session = GameSession::new();
    assert_eq!(session.play_round(4), RoundOutcome::Placed);
    let before = session.board().clone();

    // The other player tries the same cell: rejected, board and turn
    // unchanged.
    assert_eq!(session.play_round(4), RoundOutcome::Rejected);
    assert_eq!(session.board(), &before);
    assert_eq!(session.active_index(), 1);
}

#[test]
fn test_scenario_moves_after_win_ignored() {
    let mut session = GameSession::new();
    for index in [0, 3, 1, 4, 2] {
        session.play_round(index);
    }
    assert_eq!(session.status(), GameStatus::Won(Marker::X));
    let frozen = session.board().clone();

    for index in 0..9 {
        assert_eq!(session.play_round(index), RoundOutcome::Ignored);
    }
    assert_eq!(session.board(), &frozen);
    assert_eq!(session.status(), GameStatus::Won(Marker::X));
    assert_eq!(session.active_index(), 0);
}

#[test]
fn test_win_detection_symmetric_over_all_triples() {
    for triple in WIN_TRIPLES {
        // Winner takes the triple; the loser fills cells outside it,
        // feeding each loser move right after a winner move.
        let mut session = GameSession::new();
        let fillers: Vec<usize> = (0..9).filter(|i| !triple.contains(i)).collect();

        for (round, &index) in triple.iter().enumerate() {
            assert_eq!(
                session.play_round(index),
                RoundOutcome::Placed,
                "winner move {} of triple {:?}",
                index,
                triple
            );
            if round < 2 {
                assert_eq!(session.play_round(fillers[round]), RoundOutcome::Placed);
            }
        }

        assert_eq!(
            session.status(),
            GameStatus::Won(Marker::X),
            "triple {:?} should win",
            triple
        );
    }
}

#[test]
fn test_full_board_with_win_is_won_not_tied() {
    let mut session = GameSession::new();
    // X: 0, 1, 4, 5, 8 (wins on the 0,4,8 diagonal with the ninth mark);
    // O: 2, 3, 6, 7. No earlier triple completes.
    for index in [0, 2, 1, 3, 4, 6, 5, 7, 8] {
        assert_eq!(session.play_round(index), RoundOutcome::Placed);
    }

    assert!(session.board().is_full());
    assert_eq!(session.status(), GameStatus::Won(Marker::X));
    assert_eq!(session.result_message(), "Player 1 wins!");
}

#[test]
fn test_restart_uses_fixed_defaults() {
    let mut session = GameSession::new();
    session.start("Alice", "Bob");
    session.play_round(0);

    session.restart();
    assert_eq!(session.players()[0].name, DEFAULT_PLAYER_ONE);
    assert_eq!(session.players()[1].name, DEFAULT_PLAYER_TWO);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.active_index(), 0);
    assert!(session.board().cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_start_with_blank_names_falls_back() {
    let mut session = GameSession::new();
    session.start("", "   ");
    assert_eq!(session.players()[0].name, DEFAULT_PLAYER_ONE);
    assert_eq!(session.players()[1].name, DEFAULT_PLAYER_TWO);
}
