//! Benchmarks for the three traversal modes of a Cartesian product
//!
//! Run with: `cargo bench --bench product`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use odometer_core::CartesianProduct;

/// `arity` factors of `width` elements each.
fn factors(arity: usize, width: usize) -> Vec<Vec<u32>> {
    (0..arity)
        .map(|factor| (0..width as u32).map(|n| n + factor as u32).collect())
        .collect()
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for (arity, width) in [(2, 64), (4, 8), (8, 3)] {
        let factors = factors(arity, width);
        let product = CartesianProduct::new(&factors);
        let label = format!("{arity}x{width}");

        group.bench_with_input(BenchmarkId::new("get", &label), &product, |b, product| {
            b.iter(|| {
                for index in 0..product.len() {
                    black_box(product.get(index));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("iter", &label), &product, |b, product| {
            b.iter(|| {
                for combination in product {
                    black_box(combination);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("for_each", &label), &product, |b, product| {
            b.iter(|| {
                product.for_each(|combination, index| {
                    black_box((combination, index));
                });
            });
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for arity in [2, 8, 16] {
        let factors = factors(arity, 3);
        let product = CartesianProduct::new(&factors);
        let last = product.len() - 1;

        group.bench_with_input(BenchmarkId::new("get_last", arity), &product, |b, product| {
            b.iter(|| black_box(product.get(black_box(last))));
        });

        group.bench_with_input(BenchmarkId::new("nth_last", arity), &product, |b, product| {
            b.iter(|| black_box(product.iter().nth(black_box(last))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversal, bench_random_access);
criterion_main!(benches);
