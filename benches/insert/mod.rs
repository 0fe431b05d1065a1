use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use splaytree::SplayTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to insert `n_values` number of random values, and
/// `n_values` ascending values, into an empty tree.
///
/// Ascending inserts are the best case for a splay tree, as each new value is
/// linked above the previous root without any rotations.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "random",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (SplayTree::new(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.add(rand.next());
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });

    let bench_name = BenchName {
        bench: "ascending",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            SplayTree::new,
            |mut t| {
                for i in 0..n_values {
                    t.add(i);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
