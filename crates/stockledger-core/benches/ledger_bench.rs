//! Ledger engine performance benchmarks.
//!
//! Run with: cargo bench -p stockledger-core

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use stockledger_core::{Command, Ledger, Pair};

/// Build a set-stock command covering `num_skus` distinct SKUs.
fn seed_command(num_skus: usize) -> Command {
    let pairs = (0..num_skus)
        .map(|i| {
            let letters = (b'A' + (i / 100) as u8) as char;
            Pair::new(format!("{letters}{letters}-{}", i % 100), "500")
        })
        .collect();
    Command::SetStock(pairs)
}

fn bench_set_stock(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_stock");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let command = seed_command(size);
            b.iter(|| {
                let mut ledger = Ledger::new();
                ledger.apply(&command).unwrap();
                black_box(ledger)
            });
        });
    }

    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order");

    for size in [10, 100, 1000] {
        let seed = seed_command(size);
        let order = match seed_command(size) {
            Command::SetStock(pairs) => Command::Order {
                reference: "ON-1".into(),
                pairs: pairs
                    .into_iter()
                    .map(|pair| Pair::new(pair.sku, "1"))
                    .collect(),
            },
            _ => unreachable!(),
        };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut ledger = Ledger::new();
                ledger.apply(&seed).unwrap();
                ledger.apply(&order).unwrap();
                black_box(ledger)
            });
        });
    }

    group.finish();
}

fn bench_levels_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("levels");

    for size in [10, 100, 1000] {
        let mut ledger = Ledger::new();
        ledger.apply(&seed_command(size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.levels().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_stock, bench_order, bench_levels_iteration);
criterion_main!(benches);
