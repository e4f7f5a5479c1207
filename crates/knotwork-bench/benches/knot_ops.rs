//! Criterion micro-benchmarks for knot operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use knotwork_bench::{comb, comb_with_tips_selected};
use knotwork_core::Direction;
use knotwork_knot::{check_structure, Symmetries};
use knotwork_test_utils::random_knot;

/// Benchmark: validate a 1K-edge comb.
fn bench_check_structure_1k(c: &mut Criterion) {
    let knot = comb(50, 8);
    let dirs: Vec<Direction> = knot.directions().collect();

    c.bench_function("check_structure_1k", |b| {
        b.iter(|| black_box(check_structure(dirs.iter().copied())));
    });
}

/// Benchmark: move 50 separate runs at once without committing.
fn bench_try_move_50_runs(c: &mut Criterion) {
    let knot = comb_with_tips_selected(50, 8);

    c.bench_function("try_move_50_runs", |b| {
        b.iter(|| black_box(knot.try_move(Direction::Up, 1)));
    });
}

/// Benchmark: a move that cancels most of its bridges.
fn bench_try_move_collapse(c: &mut Criterion) {
    let knot = comb_with_tips_selected(50, 8);

    c.bench_function("try_move_collapse", |b| {
        b.iter(|| black_box(knot.try_move(Direction::Down, 4)));
    });
}

/// Benchmark: shape equality of a comb and a translated copy.
fn bench_equality_1k(c: &mut Criterion) {
    let a = comb(50, 8);
    let mut b_knot = comb(50, 8);
    b_knot.select_all();
    let _ = b_knot.move_selection(Direction::Backward, 3);

    c.bench_function("equality_1k", |b| {
        b.iter(|| black_box(a == b_knot));
    });
}

/// Benchmark: congruence search over all 48 lattice symmetries.
fn bench_congruence_random(c: &mut Criterion) {
    let a = random_knot(11, 200);
    let b_knot = a.clone();

    c.bench_function("congruence_48", |b| {
        b.iter(|| black_box(a.congruent_to(&b_knot, Symmetries::RotationsAndReflections)));
    });
}

criterion_group!(
    benches,
    bench_check_structure_1k,
    bench_try_move_50_runs,
    bench_try_move_collapse,
    bench_equality_1k,
    bench_congruence_random,
);
criterion_main!(benches);
