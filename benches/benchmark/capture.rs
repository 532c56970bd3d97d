use crate::common::{check_stock, configure_criterion, OrderLine};
use criterion::{criterion_group, Criterion};
use outcome_rail::capture::{catch_panic, try_call};
use std::hint::black_box;

pub fn bench_try_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture/try_call");

    group.bench_function("success_path", |b| {
        b.iter(|| black_box(try_call(check_stock, (OrderLine::new(3),))))
    });

    group.bench_function("error_path", |b| {
        b.iter(|| black_box(try_call(check_stock, (OrderLine::new(8),))))
    });

    group.bench_function("baseline_plain_call", |b| {
        b.iter(|| black_box(check_stock(OrderLine::new(3))))
    });

    group.finish();
}

pub fn bench_catch_panic(c: &mut Criterion) {
    c.bench_function("capture/catch_panic_success", |b| {
        b.iter(|| black_box(catch_panic(|a: u64, b: u64| a.wrapping_mul(b), (6, 7))))
    });
}

criterion_group! {
    name = capture_benches;
    config = configure_criterion();
    targets =
        bench_try_call,
        bench_catch_panic,
}
