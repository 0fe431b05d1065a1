use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use splaytree::{Snapshot, SplayTree};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = SplayTree::new();

    for _i in 0..n_values {
        t.add(rand.next());
    }

    bench_iter(n_values, g, &t);

    let snap = t.snapshot();
    bench_in_order(n_values, g, &snap);
    bench_post_order(n_values, g, &snap);
    bench_level_order(n_values, g, &snap);
}

/// Measure taking a snapshot of the tree and iterating over it, as performed
/// by [`SplayTree::iter()`].
fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &SplayTree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            let iter = t.iter();
            for v in iter {
                black_box(v);
            }
        })
    });
}

macro_rules! traversal_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, snap: &Snapshot<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let iter = snap.$name();
                        for v in iter {
                            black_box(v);
                        }
                    })
                });
            }
        }
    }
}

traversal_bench!(in_order);
traversal_bench!(post_order);
traversal_bench!(level_order);
