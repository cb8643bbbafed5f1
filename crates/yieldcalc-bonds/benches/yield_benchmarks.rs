//! Benchmarks for the yield solver and schedule generation.
//!
//! Run with: cargo bench -p yieldcalc-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use yieldcalc_bonds::prelude::*;
use yieldcalc_core::types::{BondInput, Date};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_bond(years: f64, frequency: u32) -> BondInput {
    BondInput::new(1000.0, 0.045, 962.5, years, frequency)
}

fn start() -> Date {
    Date::from_ymd(2025, 1, 15).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_yield_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solver");
    let solver = YieldSolver::new();

    for (years, frequency) in [(5.0, 1), (10.0, 2), (30.0, 2), (30.0, 12)] {
        let bond = create_test_bond(years, frequency);
        let label = format!("{years}y_f{frequency}");
        group.bench_with_input(BenchmarkId::new("bisection", label), &bond, |b, bond| {
            b.iter(|| solver.solve(black_box(bond)));
        });
    }

    let unbracketed = BondInput::new(1000.0, 0.0, 0.001, 1.0, 1);
    group.bench_function("approximation_fallback", |b| {
        b.iter(|| solver.solve(black_box(&unbracketed)));
    });

    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");

    for frequency in [1, 2, 4, 5, 12] {
        let bond = create_test_bond(30.0, frequency);
        group.bench_with_input(
            BenchmarkId::new("generate_schedule", frequency),
            &bond,
            |b, bond| {
                b.iter(|| generate_schedule(black_box(bond), start()));
            },
        );
    }

    group.finish();
}

fn bench_calculator(c: &mut Criterion) {
    let calculator = BondCalculator::new();
    let bond = create_test_bond(10.0, 2);

    c.bench_function("calculate_10y_semi_annual", |b| {
        b.iter(|| calculator.calculate(black_box(&bond), start()));
    });
}

criterion_group!(benches, bench_yield_solver, bench_schedule, bench_calculator);
criterion_main!(benches);
