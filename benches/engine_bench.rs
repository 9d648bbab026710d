//! Engine Benchmarks
//!
//! Performance benchmarks for move generation, evaluation and search using
//! Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawnking_engine::evaluation::evaluate;
use pawnking_engine::move_gen::GeneratorConfig;
use pawnking_engine::{Color, GameState, Searcher, Tables};

fn bench_build_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| b.iter(|| black_box(Tables::new())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let tables = Tables::new();
    let state = GameState::default();

    c.bench_function("generate_moves_starting_position", |b| {
        b.iter(|| black_box(state.generate_moves(&tables.attacks, GeneratorConfig::default())))
    });
}

fn bench_move_generation_with_sliders(c: &mut Criterion) {
    let tables = Tables::new();
    let state = GameState::snapshot_from(
        concat!(
            "R000K00R", "PPP00PPP", "00NB0N00", "000QP000",
            "000pp000", "00nb0n00", "ppp00ppp", "r00qk00r",
        ),
        Color::White,
    )
    .expect("valid snapshot");
    let config = GeneratorConfig { sliding_pieces: true };

    c.bench_function("generate_moves_open_position_sliders", |b| {
        b.iter(|| black_box(state.generate_moves(&tables.attacks, config)))
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let tables = Tables::new();
    let state = GameState::default();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&state, &tables.eval)))
    });
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let tables = Tables::new();
    let mut state = GameState::default();
    let moves = state.generate_moves(&tables.attacks, GeneratorConfig::default());

    c.bench_function("push_pop_all_root_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                state.push(mv);
                state.pop();
            }
            black_box(state.history_len())
        })
    });
}

fn bench_root_search(c: &mut Criterion) {
    let tables = Tables::new();
    let mut group = c.benchmark_group("best_move");
    group.sample_size(10);

    for depth in [1u32, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let mut state = GameState::default();
            b.iter(|| {
                let mut searcher = Searcher::new(&tables, GeneratorConfig::default());
                black_box(searcher.best_move(&mut state, depth))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_tables,
    bench_move_generation_starting,
    bench_move_generation_with_sliders,
    bench_evaluate_starting,
    bench_push_pop_cycle,
    bench_root_search,
);
criterion_main!(benches);
