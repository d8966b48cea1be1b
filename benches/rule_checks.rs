use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blokus_engine::core::pieces::catalog;
use blokus_engine::core::{validate_placement, GameState};
use blokus_engine::types::Color;

/// A midgame position: every color has opened on its corner plus one
/// diagonal follow-up.
fn midgame_state() -> GameState {
    let mut state = GameState::new();
    for color in Color::ALL {
        let (x, y) = color.home_corner();
        state.attempt_move(color, 1, 0, (x, y)).unwrap();
    }
    // Diagonal dominoes toward the center.
    state.attempt_move(Color::Blue, 2, 0, (1, 1)).unwrap();
    state.attempt_move(Color::Yellow, 2, 0, (18, 1)).unwrap();
    state.attempt_move(Color::Green, 2, 0, (18, 17)).unwrap();
    state.attempt_move(Color::Red, 2, 0, (1, 17)).unwrap();
    state
}

fn bench_validate_placement(c: &mut Criterion) {
    let state = midgame_state();
    let shape = &catalog().shapes_for(19).unwrap()[0];

    c.bench_function("validate_placement", |b| {
        b.iter(|| {
            validate_placement(
                state.board(),
                black_box(shape),
                black_box((2, 3)),
                Color::Blue,
                false,
            )
        })
    });
}

fn bench_has_legal_move(c: &mut Criterion) {
    let state = midgame_state();

    c.bench_function("has_legal_move", |b| {
        b.iter(|| state.has_legal_move(black_box(Color::Blue)))
    });
}

fn bench_full_move(c: &mut Criterion) {
    let base = midgame_state();

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            let mut state = base.clone();
            state
                .attempt_move(Color::Blue, black_box(3), 0, black_box((2, 3)))
                .unwrap()
        })
    });
}

fn bench_catalog_scan(c: &mut Criterion) {
    c.bench_function("catalog_orientations", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for id in 1..=21 {
                total += catalog().shapes_for(black_box(id)).unwrap().len();
            }
            total
        })
    });
}

criterion_group!(
    benches,
    bench_validate_placement,
    bench_has_legal_move,
    bench_full_move,
    bench_catalog_scan
);
criterion_main!(benches);
