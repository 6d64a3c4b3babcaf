use criterion::{black_box, criterion_group, criterion_main, Criterion};
use niuniu::analyze::all_hands;
use niuniu::card::Hand;
use niuniu::scoring::{evaluate_hand, solve, solve_many};

fn benchmark_single_hand(c: &mut Criterion) {
    let plain = Hand::new([10, 10, 10, 5, 5]).expect("Valid hand");
    let wild = Hand::new([3, 6, 3, 6, 3]).expect("Valid hand");

    c.bench_function("evaluate_hand", |b| b.iter(|| evaluate_hand(black_box(&plain))));
    c.bench_function("solve_no_wildcards", |b| b.iter(|| solve(black_box(&plain))));
    c.bench_function("solve_five_wildcards", |b| b.iter(|| solve(black_box(&wild))));
}

fn benchmark_all_hands(c: &mut Criterion) {
    let hands = all_hands();

    c.bench_function("solve_all_hands_sequential", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(solve(black_box(hand)));
            }
        })
    });

    c.bench_function("solve_all_hands_parallel", |b| {
        b.iter(|| solve_many(black_box(&hands)))
    });
}

criterion_group!(benches, benchmark_single_hand, benchmark_all_hands);
criterion_main!(benches);
