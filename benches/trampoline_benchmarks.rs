//! Performance benchmarks for the Springboard primitives
//!
//! Run with: cargo bench
//!
//! These benchmarks measure key performance characteristics:
//! - Per-bounce overhead of the trampoline driver
//! - Trampolined factorial against a plain iterative loop
//! - Flattening cost as nesting depth grows
//! - Step-loop turn throughput

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use num_traits::One;
use springboard::factorial::factorial;
use springboard::nested::{flatten, Nested};
use springboard::prime_scan::{MemorySink, PrimeScan};
use springboard::scheduler::StepLoop;
use springboard::trampoline::{run, Step};

fn countdown(n: u64) -> Step<u64> {
    if n == 0 {
        Step::Done(0)
    } else {
        Step::more(move || countdown(n - 1))
    }
}

/// Benchmark: raw bounce overhead of the driver loop
fn bench_bounce_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounce");

    for n in [1_000u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| run(countdown(black_box(n))))
        });
    }

    group.finish();
}

/// Benchmark: trampolined factorial vs a plain iterative fold
fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    group.bench_function("trampoline_500", |b| {
        b.iter(|| factorial(black_box(500)))
    });

    group.bench_function("iterative_500", |b| {
        b.iter(|| {
            (1..=black_box(500u64)).fold(BigUint::one(), |acc, i| acc * i)
        })
    });

    group.finish();
}

/// Benchmark: flattening cost as nesting depth grows
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for depth in [64usize, 512, 4_096] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter_batched(
                || {
                    let mut node = Nested::leaf(depth as u64);
                    for i in (1..depth as u64).rev() {
                        node = Nested::list(vec![Nested::leaf(i), node]);
                    }
                    node
                },
                |input| flatten(input),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark: step-loop turn throughput on a prime scan
fn bench_step_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_loop");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("prime_scan_1000", |b| {
        b.iter_batched(
            || {
                let mut steploop = StepLoop::new();
                steploop.spawn(PrimeScan::new(1_000, MemorySink::new()));
                steploop
            },
            |mut steploop| steploop.run_to_completion(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bounce_overhead,
    bench_factorial,
    bench_flatten,
    bench_step_loop
);
criterion_main!(benches);
