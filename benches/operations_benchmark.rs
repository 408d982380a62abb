// ============================================================================
// Math Operations Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Invariant decimal token parsing
// 2. Power - Integer and fractional exponents
// 3. Square Root - Newton-Raphson convergence across magnitudes
// 4. Dispatch - Generic entry points vs. Calculator tagged-union dispatch
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use math_operations::numeric::parse_invariant;
use math_operations::prelude::*;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_invariant");

    for token in ["42", "-123.456", "6.02214076e23", "invalid"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| black_box(parse_invariant(black_box(token))));
        });
    }

    group.finish();
}

// ============================================================================
// Power Benchmarks
// ============================================================================

fn benchmark_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");

    // Larger exponents mean more repeated multiplications
    for exponent in [3.0, 30.0, 300.0] {
        group.bench_with_input(
            BenchmarkId::new("float_integer_exponent", exponent),
            &exponent,
            |b, &exponent| {
                b.iter(|| black_box(power(black_box(1.0001), exponent)));
            },
        );
    }

    group.bench_function("float_fractional_exponent", |b| {
        b.iter(|| black_box(power(black_box(2.0), black_box(1.5))));
    });

    group.bench_function("integer", |b| {
        b.iter(|| black_box(power(black_box(3), black_box(19))));
    });

    group.finish();
}

// ============================================================================
// Square Root Benchmarks
// ============================================================================

fn benchmark_square_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_root");

    // Iteration count grows with distance from 1
    for number in [2.0, 1e10, 1e100, 1e300] {
        group.bench_with_input(BenchmarkId::from_parameter(number), &number, |b, &n| {
            b.iter(|| black_box(square_root(black_box(n))));
        });
    }

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let calc = Calculator::new();
    let lhs = Operand::from("2.5");
    let rhs = Operand::Integer(4);

    group.bench_function("generic_text", |b| {
        b.iter(|| black_box(multiply(black_box("2.5"), black_box("4"))));
    });

    group.bench_function("calculator_mixed", |b| {
        b.iter(|| black_box(calc.apply(BinaryOperation::Multiply, &lhs, &rhs)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_power,
    benchmark_square_root,
    benchmark_dispatch,
);
criterion_main!(benches);
