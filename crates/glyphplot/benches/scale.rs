use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glyphplot::{linear_map, linspace, tick_label};

fn bench_linear_map(c: &mut Criterion) {
    c.bench_function("linear_map", |b| {
        b.iter(|| linear_map(black_box(0.37), 0.0, 1.0, 18.0, 200.0))
    });
}

fn bench_linspace(c: &mut Criterion) {
    c.bench_function("linspace_64", |b| {
        b.iter(|| linspace(black_box(-3.0), black_box(97.0), 64))
    });
}

fn bench_tick_label(c: &mut Criterion) {
    c.bench_function("tick_label", |b| b.iter(|| tick_label(black_box(-12.345))));
}

criterion_group!(benches, bench_linear_map, bench_linspace, bench_tick_label);
criterion_main!(benches);
