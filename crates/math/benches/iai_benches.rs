//! iai-callgrind benchmarks for prim-math
//!
//! Measures instruction counts (deterministic, cachegrind-based).
//! Run with: cargo bench --bench iai_benches

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use prim_math::{Math, Result};
use std::hint::black_box;

// Clamp

#[library_benchmark]
fn bench_clamp_f64() -> Result<f64> {
    black_box(Math::clamp(black_box(7.0f64), black_box(1.0), black_box(5.0)))
}

#[library_benchmark]
fn bench_clamp_f64_nan_bound() -> Result<f64> {
    black_box(Math::clamp(black_box(7.0f64), black_box(f64::NAN), black_box(5.0)))
}

#[library_benchmark]
fn bench_clamp_f32() -> Result<f32> {
    black_box(Math::clamp(black_box(7.0f32), black_box(1.0), black_box(5.0)))
}

#[library_benchmark]
fn bench_clamp_u64() -> Result<u64> {
    black_box(Math::clamp(black_box(7u64), black_box(1), black_box(5)))
}

// Min/Max and sign

#[library_benchmark]
fn bench_max_f64() -> f64 {
    black_box(Math::max(black_box(-0.0f64), black_box(0.0)))
}

#[library_benchmark]
fn bench_min_f32() -> f32 {
    black_box(Math::min(black_box(3.0f32), black_box(-2.0)))
}

#[library_benchmark]
fn bench_sign_f32() -> Result<i32> {
    black_box(Math::sign(black_box(-3.5f32)))
}

#[library_benchmark]
fn bench_abs_i32() -> Result<i32> {
    black_box(Math::abs(black_box(-42i32)))
}

// Relays

#[library_benchmark]
fn bench_sin() -> f64 {
    black_box(Math::sin(black_box(0.75)))
}

#[library_benchmark]
fn bench_exp_f32() -> f32 {
    black_box(Math::exp_f32(black_box(1.25)))
}

#[library_benchmark]
fn bench_round() -> f64 {
    black_box(Math::round(black_box(2.5)))
}

library_benchmark_group!(
    name = clamp_group;
    benchmarks = bench_clamp_f64, bench_clamp_f64_nan_bound, bench_clamp_f32, bench_clamp_u64
);

library_benchmark_group!(
    name = ordering_group;
    benchmarks = bench_max_f64, bench_min_f32, bench_sign_f32, bench_abs_i32
);

library_benchmark_group!(
    name = relay_group;
    benchmarks = bench_sin, bench_exp_f32, bench_round
);

main!(
    library_benchmark_groups = clamp_group,
    ordering_group,
    relay_group
);
