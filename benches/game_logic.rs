use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{Board, GameSession};
use tui_tictactoe::types::Marker;

fn bench_play_round(c: &mut Criterion) {
    c.bench_function("play_round_center", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            session.play_round(black_box(4))
        })
    });
}

fn bench_win_scan(c: &mut Criterion) {
    let mut board = Board::new();
    // Near-full board with no win yet: the scan walks all 8 triples.
    for (index, marker) in [
        (0, Marker::X),
        (1, Marker::O),
        (2, Marker::X),
        (4, Marker::O),
        (3, Marker::X),
        (5, Marker::O),
        (7, Marker::X),
        (6, Marker::O),
    ] {
        board.set_mark(index, marker);
    }

    c.bench_function("winning_triple_scan", |b| {
        b.iter(|| board.winning_triple(black_box(Marker::X)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_to_win", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            for index in [0, 3, 1, 4, 2] {
                session.play_round(black_box(index));
            }
            session.status()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new();
    for index in [0, 3, 1, 4] {
        session.play_round(index);
    }

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(
    benches,
    bench_play_round,
    bench_win_scan,
    bench_full_game,
    bench_snapshot
);
criterion_main!(benches);
