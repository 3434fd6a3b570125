// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Two-pass digit extraction with separators
// 2. Addition - Carry propagation and chunked growth
// 3. Multiplication - Schoolbook multiply vs. repeated addition
// 4. Factorial - End-to-end product chains
// ============================================================================

use big_unsigned::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn digits_of_len(len: usize) -> String {
    (0..len).map(|i| char::from(b'1' + (i % 9) as u8)).collect()
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for len in [16, 256, 4096].iter() {
        let plain = digits_of_len(*len);
        let separated: String = plain.chars().flat_map(|d| [d, '_']).collect();

        group.bench_with_input(BenchmarkId::new("plain", len), &plain, |b, text| {
            b.iter(|| black_box(BigUnsigned::parse(text).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("separated", len), &separated, |b, text| {
            b.iter(|| black_box(BigUnsigned::parse(text).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for len in [16, 256, 4096].iter() {
        let lhs = BigUnsigned::parse(digits_of_len(*len)).unwrap();
        let rhs = BigUnsigned::parse(digits_of_len(*len / 2 + 1)).unwrap();

        group.bench_with_input(BenchmarkId::new("checked_add", len), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| black_box(lhs.try_clone().unwrap().checked_add(*rhs).unwrap()));
        });
    }

    group.bench_function("increment_10k", |b| {
        b.iter(|| {
            let mut x = BigUnsigned::from(ZERO);
            for _ in 0..10_000 {
                x = x.checked_inc().unwrap();
            }
            black_box(x)
        });
    });

    group.finish();
}

// ============================================================================
// Multiplication Benchmarks
// ============================================================================

fn benchmark_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for len in [16, 64, 256].iter() {
        let lhs = BigUnsigned::parse(digits_of_len(*len)).unwrap();
        let rhs = BigUnsigned::parse(digits_of_len(*len)).unwrap();

        group.bench_with_input(BenchmarkId::new("checked_mul", len), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| black_box(lhs.try_clone().unwrap().checked_mul(*rhs).unwrap()));
        });
    }

    let value = BigUnsigned::parse(digits_of_len(256)).unwrap();
    for times in [2usize, 9].iter() {
        group.bench_with_input(BenchmarkId::new("checked_mul_small", times), times, |b, times| {
            b.iter(|| black_box(value.try_clone().unwrap().checked_mul_small(*times).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Factorial Benchmarks
// ============================================================================

fn benchmark_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    for n in [25usize, 100, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, n| {
            b.iter(|| black_box(BigUnsigned::factorial(*n).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_add,
    benchmark_mul,
    benchmark_factorial
);
criterion_main!(benches);
