//! Criterion benchmarks for textframe.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use textframe::Frame;

fn bench_first_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_update");
    group.throughput(Throughput::Elements(1));

    group.bench_function("80x24", |b| {
        b.iter(|| {
            let mut frame = Frame::new(black_box(80), black_box(24)).unwrap();
            frame.update().unwrap().len()
        });
    });

    group.bench_function("200x60", |b| {
        b.iter(|| {
            let mut frame = Frame::new(black_box(200), black_box(60)).unwrap();
            frame.update().unwrap().len()
        });
    });

    group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state");
    group.sample_size(1000);
    group.throughput(Throughput::Elements(80 * 24));

    let mut frame = Frame::new(80, 24).unwrap();
    frame.update().unwrap();

    group.bench_function("empty_cycle_80x24", |b| {
        b.iter(|| frame.update().unwrap().len());
    });

    let row = [b'x'; 80];
    group.bench_function("full_rows_80x24", |b| {
        b.iter(|| {
            for y in 0..24 {
                frame.sub_frame(y, 0).write(black_box(&row)).unwrap();
            }
            frame.update().unwrap().len()
        });
    });

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    group.throughput(Throughput::Elements(256));

    let mut frame = Frame::new(120, 40).unwrap();
    frame.update().unwrap();

    group.bench_function("scattered_256_writes", |b| {
        b.iter(|| {
            for i in 0..256usize {
                frame
                    .sub_frame(i % 40, (i * 7) % 120)
                    .write(black_box(b"item"))
                    .unwrap();
            }
            frame.update().unwrap().len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_first_update, bench_steady_state, bench_drain);
criterion_main!(benches);
