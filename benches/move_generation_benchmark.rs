//! Benchmarks for the move interpreter on the classic rule set: raw
//! candidate generation, king-safety filtering, and check detection.

use common::coordinate::Position;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fairyboard::board::color::Color;
use fairyboard::board::piece::PieceSearch;
use fairyboard::game::Game;
use fairyboard::move_generation::check::piece_is_in_check;
use fairyboard::move_generation::{generate_moves, legal_moves};
use fairyboard::rules::classic;

fn opening_game() -> Game {
    let mut game = Game::new(classic::classic()).unwrap();
    let line = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ];
    for (origin, destination) in &line {
        game.make_move(square(origin), square(destination), None)
            .unwrap();
    }
    game
}

fn square(notation: &str) -> Position {
    Position::from_notation(notation).unwrap()
}

fn benchmark_candidate_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Candidate Generation");
    let game = opening_game();
    let board = game.board();

    for (name, origin) in &[("knight", "f3"), ("bishop", "c4"), ("queen", "d1")] {
        group.bench_with_input(BenchmarkId::new("piece", name), origin, |b, origin| {
            b.iter(|| {
                let generated =
                    generate_moves(black_box(board), square(origin), game.last_move()).unwrap();
                black_box(generated)
            })
        });
    }

    group.finish();
}

fn benchmark_legal_move_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal Move Filtering");
    let game = opening_game();
    let board = game.board();

    group.bench_function("all_white_pieces", |b| {
        b.iter(|| {
            let mut total = 0;
            for space in board.piece_spaces(&PieceSearch::any().with_color(Color::White)) {
                let generated =
                    legal_moves(black_box(board), space.position(), game.last_move()).unwrap();
                total += generated.candidates.len();
            }
            black_box(total)
        })
    });

    group.finish();
}

fn benchmark_check_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Check Detection");
    let game = opening_game();
    let board = game.board();

    for color in &[Color::White, Color::Black] {
        group.bench_with_input(
            BenchmarkId::new("king", format!("{}", color)),
            color,
            |b, color| {
                b.iter(|| {
                    let in_check = piece_is_in_check(black_box(board), "king", *color).unwrap();
                    black_box(in_check)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_candidate_generation,
    benchmark_legal_move_filtering,
    benchmark_check_detection
);
criterion_main!(benches);
