// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quadbench::{
    workload, BenchConfig, CallingConvention, Coefficients, Driver, ExecutionMode,
    DEFAULT_EPSILON,
};
use std::hint::black_box;

pub fn single_equation(c: &mut Criterion) {
    let two_roots = Coefficients::new(1.0, -3.0, 2.0);
    let degenerate = Coefficients::new(0.0, 0.0, 0.0);

    let mut group = c.benchmark_group("single");
    for convention in CallingConvention::ALL {
        group.bench_function(BenchmarkId::new("two roots", convention), |b| {
            b.iter(|| convention.roots_sum(black_box(two_roots), DEFAULT_EPSILON));
        });
        group.bench_function(BenchmarkId::new("degenerate", convention), |b| {
            b.iter(|| convention.roots_sum(black_box(degenerate), DEFAULT_EPSILON));
        });
    }
    group.finish();
}

pub fn workload_pass(c: &mut Criterion) {
    const N: u64 = 4096 * 16;

    let mut group = c.benchmark_group("pass");
    group.throughput(Throughput::Elements(N));
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let driver = Driver::new(BenchConfig::default().mode(mode)).unwrap();
        for convention in CallingConvention::ALL {
            let id = BenchmarkId::new(format!("{mode:?}"), convention);
            group.bench_function(id, |b| b.iter(|| driver.run(black_box(N), convention)));
        }
    }
    group.bench_function("generate only", |b| {
        b.iter(|| workload(0..black_box(N)).fold(0.0, |acc, eq| acc + eq.a));
    });
    group.finish();
}

criterion_group!(benches, single_equation, workload_pass);
criterion_main!(benches);
