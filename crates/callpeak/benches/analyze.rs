use std::hint::black_box;

use callpeak::{CallRecord, ConcurrencyAnalyzer, TieBreak};
use criterion::{criterion_group, criterion_main, Criterion};

/// Deterministic call set: `customers` customers, each with `per_customer`
/// calls of 1-60 minutes spread over three days.
fn synthetic_calls(customers: i64, per_customer: i64) -> Vec<CallRecord> {
    let mut calls = Vec::new();
    for customer in 0..customers {
        for n in 0..per_customer {
            let seed = (customer * 7_919 + n * 104_729) % 259_200;
            let start = seed * 1_000;
            let duration = ((n * 37) % 60 + 1) * 60_000;
            calls.push(CallRecord::new(
                customer,
                format!("{customer}-{n}"),
                start,
                start + duration,
            ));
        }
    }
    calls
}

fn benchmark_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analyze");

    let small = synthetic_calls(10, 50);
    let dense = synthetic_calls(2, 1_000);

    let analyzer = ConcurrencyAnalyzer::new();
    group.bench_function("10 customers x 50 calls", |b| {
        b.iter(|| analyzer.analyze(black_box(&small)).unwrap())
    });
    group.bench_function("2 customers x 1000 calls", |b| {
        b.iter(|| analyzer.analyze(black_box(&dense)).unwrap())
    });

    let earliest = ConcurrencyAnalyzer::with_tie_break(TieBreak::Earliest);
    group.bench_function("2 customers x 1000 calls (earliest)", |b| {
        b.iter(|| earliest.analyze(black_box(&dense)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_analyze);
criterion_main!(benches);
