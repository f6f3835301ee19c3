use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanofmt::{MicroUnit, Printer};
use test_helpers::{SAMPLE_DURATIONS, SAMPLE_SIZES};

// Baseline: what the same output costs through `format!` and a fresh String.
fn naive_duration(ns: i64) -> String {
    let abs = ns.unsigned_abs() as f64;
    if abs < 1e3 {
        format!("{ns} ns")
    } else if abs < 1e6 {
        format!("{:.2} us", ns as f64 / 1e3)
    } else if abs < 1e9 {
        format!("{:.2} ms", ns as f64 / 1e6)
    } else {
        format!("{:.2} s", ns as f64 / 1e9)
    }
}

fn bench_durations(c: &mut Criterion) {
    let mut printer = Printer::new().with_micro_unit(MicroUnit::Ascii);

    // One call per branch
    for &ns in &SAMPLE_DURATIONS {
        c.bench_function(&format!("duration::{ns}"), |b| {
            b.iter(|| {
                black_box(printer.duration(black_box(ns)).len());
            })
        });
    }

    c.bench_function("duration::sweep_samples", |b| {
        b.iter(|| {
            for &ns in &SAMPLE_DURATIONS {
                black_box(printer.format_duration(black_box(ns)));
            }
        })
    });

    c.bench_function("duration::thread_local", |b| {
        b.iter(|| black_box(nanofmt::format_duration(black_box(12_345_678))))
    });

    c.bench_function("duration::format_macro_baseline", |b| {
        b.iter(|| black_box(naive_duration(black_box(12_345_678))))
    });
}

fn bench_sizes(c: &mut Criterion) {
    let mut printer = Printer::new();

    c.bench_function("size::plain_bytes", |b| {
        b.iter(|| black_box(printer.size(black_box(9_999)).len()))
    });

    c.bench_function("size::scaled", |b| {
        b.iter(|| black_box(printer.size(black_box(16_106_127_360)).len()))
    });

    c.bench_function("size::sweep_samples", |b| {
        b.iter(|| {
            for &v in &SAMPLE_SIZES {
                black_box(printer.format_size(black_box(v)));
            }
        })
    });
}

criterion_group!(benches, bench_durations, bench_sizes);
criterion_main!(benches);
