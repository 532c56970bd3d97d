use crate::common::{configure_criterion, every_seventh_fails, OrderLine};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use outcome_rail::{
    collect_all, collect_all_slice, collect_values, collect_values_slice, Error, Outcome,
};
use std::hint::black_box;

pub fn bench_collect_values_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect/values");

    for size in [10u64, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("all_success_sequence", size), &size, |b, &n| {
            b.iter(|| black_box(collect_values((0..n).map(|i| Outcome::ok(OrderLine::new(i))))))
        });

        group.bench_with_input(BenchmarkId::new("every_7th_fails_sequence", size), &size, |b, &n| {
            b.iter(|| black_box(collect_values((0..n).map(every_seventh_fails))))
        });

        let list: Vec<_> = (0..size).map(every_seventh_fails).collect();
        group.bench_with_input(BenchmarkId::new("every_7th_fails_slice", size), &list, |b, list| {
            b.iter(|| black_box(collect_values_slice(list)))
        });
    }

    group.finish();
}

pub fn bench_collect_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect/all");

    let checks: Vec<Outcome> = (0..1_000)
        .map(|i| if i % 7 == 0 { Outcome::fail(Error::new("check failed")) } else { Outcome::OK })
        .collect();

    group.bench_function("sequence", |b| {
        b.iter(|| black_box(collect_all(checks.iter().cloned())))
    });

    group.bench_function("slice", |b| b.iter(|| black_box(collect_all_slice(&checks))));

    group.bench_function("from_iterator", |b| {
        b.iter(|| black_box(checks.iter().cloned().collect::<Outcome>()))
    });

    group.finish();
}

criterion_group! {
    name = collect_benches;
    config = configure_criterion();
    targets =
        bench_collect_values_scaling,
        bench_collect_all,
}
