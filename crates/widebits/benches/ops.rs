//! Benchmarks for the fixed-width operations.
//!
//! Measures:
//! - Native per-width operations (u16, u32, u64)
//! - 32-bit primitives under each backend
//! - Composite Wide64 operations under each backend
//! - Byte codecs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use widebits::primitives::{Backend, Primitives32};
use widebits::wide::WideOps;
use widebits::{w16, w32, w64, Wide64};

// =============================================================================
// Native Widths
// =============================================================================

fn bench_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("native");
    group.throughput(Throughput::Elements(1));

    group.bench_function("w16_rol", |b| {
        b.iter(|| black_box(w16::rol(black_box(0x1234), black_box(5))));
    });

    group.bench_function("w32_rol", |b| {
        b.iter(|| black_box(w32::rol(black_box(0x1234_5678), black_box(8))));
    });

    group.bench_function("w32_arshift", |b| {
        let x = 0x8000_0000;
        b.iter(|| black_box(w32::arshift(black_box(x), black_box(7))));
    });

    group.bench_function("w64_rol", |b| {
        let x = 0x1234_5678_9ABC_DEF0;
        b.iter(|| black_box(w64::rol(black_box(x), black_box(16))));
    });

    group.bench_function("w64_add", |b| {
        b.iter(|| black_box(w64::add(black_box(u64::MAX), black_box(1))));
    });

    group.bench_function("w32_mask", |b| {
        b.iter(|| black_box(w32::mask(black_box(-1))));
    });

    group.finish();
}

// =============================================================================
// Primitives
// =============================================================================

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives32");
    group.throughput(Throughput::Elements(1));

    let (x, y) = (0xAAAA_AAAA, 0x5555_5555);

    for backend in Backend::ALL {
        group.bench_with_input(BenchmarkId::new("xor32", backend), &backend, |b, p| {
            b.iter(|| black_box(p.xor32(black_box(x), black_box(y))));
        });

        group.bench_with_input(BenchmarkId::new("and32", backend), &backend, |b, p| {
            b.iter(|| black_box(p.and32(black_box(x), black_box(y))));
        });

        group.bench_with_input(BenchmarkId::new("arshift32", backend), &backend, |b, p| {
            b.iter(|| black_box(p.arshift32(black_box(0x8000_0000), 7)));
        });
    }

    group.finish();
}

// =============================================================================
// Composite Wide64
// =============================================================================

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide64");
    group.throughput(Throughput::Elements(1));

    let x = Wide64::new(0x1234_5678, 0x9ABC_DEF0);
    let y = Wide64::new(0x0000_0000, 0xFFFF_FFFF);

    for backend in Backend::ALL {
        group.bench_with_input(BenchmarkId::new("add", backend), &backend, |b, p| {
            b.iter(|| black_box(p.wide_add(black_box(x), black_box(y))));
        });

        group.bench_with_input(BenchmarkId::new("rol", backend), &backend, |b, p| {
            b.iter(|| black_box(p.wide_rol(black_box(x), black_box(40))));
        });

        group.bench_with_input(BenchmarkId::new("lshift", backend), &backend, |b, p| {
            b.iter(|| black_box(p.wide_lshift(black_box(x), black_box(17))));
        });

        group.bench_with_input(BenchmarkId::new("arshift", backend), &backend, |b, p| {
            b.iter(|| black_box(p.wide_arshift(black_box(x), black_box(33))));
        });
    }

    group.finish();
}

// =============================================================================
// Byte Codecs
// =============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(8));

    let x = 0x0102_0304_0506_0708;
    let bytes = w64::to_be_bytes(x);

    group.bench_function("w64_to_be_bytes", |b| {
        b.iter(|| black_box(w64::to_be_bytes(black_box(x))));
    });

    group.bench_function("w64_from_be_bytes", |b| {
        b.iter(|| black_box(w64::from_be_bytes(black_box(&bytes), 0)));
    });

    group.bench_function("w64_from_le_bytes", |b| {
        b.iter(|| black_box(w64::from_le_bytes(black_box(&bytes), 0)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_native,
    bench_primitives,
    bench_wide,
    bench_codec
);
criterion_main!(benches);
