use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use parradix::{Backend, SortConfig, sort_into};

const BENCH_SIZES: [usize; 3] = [1 << 14, 1 << 18, 1 << 22];
const SEED: u64 = 2859;

fn random_values(n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.random_range(-100_000..=100_000)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_i32");

    for &n in &BENCH_SIZES {
        let values = random_values(n);
        group.throughput(Throughput::Elements(n as u64));

        for (label, backend) in [
            ("rayon", Backend::Rayon),
            ("os_threads", Backend::OsThreads),
            ("sequential", Backend::Sequential),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &values, |b, values| {
                let mut out = vec![0i32; values.len()];
                b.iter(|| {
                    sort_into(
                        black_box(values),
                        black_box(&mut out),
                        SortConfig::default().backend(backend),
                    )
                    .unwrap();
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("std_unstable", n), &values, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_unstable();
                black_box(v);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
