//! Criterion benchmarks for work-order sequencing.
//!
//! Uses synthetic boards (seeded random tiers, pods, racks, and states)
//! to measure sequencing and parsing overhead independent of any caller.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rackops::parse;
use rackops::sequence::order_work_block;
use rackops::ticket::{LifecycleState, Ticket};

// ===========================================================================
// Synthetic board generation
// ===========================================================================

fn synthetic_board(n: usize, seed: u64) -> Vec<Ticket> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            // A slice of malformed data keeps the sentinel path hot.
            let tier = if rng.random_bool(0.1) {
                "URGENT".to_string()
            } else {
                format!("P{}", rng.random_range(0..5))
            };
            let location = if rng.random_bool(0.1) {
                "mezzanine, east wall".to_string()
            } else if rng.random_bool(0.2) {
                format!("Pod {}", rng.random_range(1..10))
            } else {
                format!(
                    "Pod {}, Rack {}U",
                    rng.random_range(1..10),
                    rng.random_range(1..48)
                )
            };
            let state = match rng.random_range(0..3) {
                0 => LifecycleState::InProgress,
                1 => LifecycleState::Complete,
                _ => LifecycleState::Ready,
            };
            Ticket::new(format!("TK-{i}"), format!("work {i}"), tier, location).with_state(state)
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_order_work_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_work_block");

    for &n in &[100usize, 1_000, 10_000] {
        let board = synthetic_board(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| {
                let out = order_work_block(black_box(board.clone()));
                black_box(out)
            })
        });
    }
    group.finish();
}

fn bench_field_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_parsing");

    let locations: Vec<String> = synthetic_board(1_000, 7)
        .into_iter()
        .map(|t| t.location)
        .collect();

    group.bench_function("pod_and_rack_1000", |b| {
        b.iter(|| {
            for location in &locations {
                black_box(parse::pod_number(black_box(location)));
                black_box(parse::rack_number(black_box(location)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_order_work_block, bench_field_parsing);
criterion_main!(benches);
