use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_bench_rs::patterns::{generate_random, generate_sorted};
use sort_bench_rs::stable::mergesort;
use sort_bench_rs::unstable::{quicksort, selection_sort};
use sort_bench_rs::Sort;

const MAX_VALUE: i32 = 1_000_000;

fn bench_sort<S: Sort>(c: &mut Criterion, pattern_name: &str, pattern: fn(usize, i32) -> Vec<i32>) {
    let mut group = c.benchmark_group(format!("{}-{pattern_name}", S::name()));

    for len in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || pattern(len, MAX_VALUE),
                |mut v| {
                    S::sort(black_box(v.as_mut_slice()));
                    v
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_sort::<selection_sort::SortImpl>(c, "random", generate_random);
    bench_sort::<mergesort::SortImpl>(c, "random", generate_random);
    bench_sort::<quicksort::SortImpl>(c, "random", generate_random);
    bench_sort::<quicksort::SortImpl>(c, "sorted", generate_sorted);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
