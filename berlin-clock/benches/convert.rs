//! Benchmark parsing and rendering the clock

#![allow(missing_docs)]

use std::hint::black_box;

use berlin_clock::{BerlinClock, TimeOfDay, convert, convert_str};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("ParseTimeOfDay", |b| {
        b.iter(|| TimeOfDay::parse(black_box("13:17:01")).unwrap())
    });
}

fn bench_convert(c: &mut Criterion) {
    let time = TimeOfDay::try_new(13, 17, 1).unwrap();

    c.bench_function("RenderBerlinClock", |b| {
        b.iter(|| BerlinClock::new(black_box(time)))
    });

    c.bench_function("ConvertTimeOfDay", |b| b.iter(|| convert(black_box(&time))));

    c.bench_function("ConvertStr", |b| {
        b.iter(|| convert_str(black_box("23:59:59")).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_convert);
criterion_main!(benches);
