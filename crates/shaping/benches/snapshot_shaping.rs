//! Benchmarks for snapshot shaping
//!
//! Run with: cargo bench --package shaping
//!
//! This benchmarks `select` over large synthetic snapshots.

use catalog::Movie;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shaping::select;

fn synthetic_snapshot(size: usize) -> Vec<Movie> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|i| {
            let year = 2015 + rng.gen_range(0..12);
            let month = rng.gen_range(1..=12);
            let release_date = if rng.gen_bool(0.9) {
                Some(format!("{year}-{month:02}-01"))
            } else {
                None
            };
            Movie {
                title: format!("Movie {i}"),
                release_date,
                popularity: rng.gen_range(0.0..500.0),
                overview: String::new(),
                poster_path: String::new(),
            }
        })
        .collect()
}

fn bench_select_small_snapshot(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(100);

    c.bench_function("select_100_movies", |b| {
        b.iter(|| {
            let visible = select(black_box(snapshot.clone()), black_box("2024"));
            black_box(visible)
        })
    });
}

fn bench_select_large_snapshot(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(10_000);

    c.bench_function("select_10k_movies", |b| {
        b.iter(|| {
            let visible = select(black_box(snapshot.clone()), black_box("2024"));
            black_box(visible)
        })
    });
}

criterion_group!(benches, bench_select_small_snapshot, bench_select_large_snapshot);
criterion_main!(benches);
