use criterion::{criterion_group, criterion_main, Criterion};
use mazetrace::{
    cells::Cartesian2DCoordinate,
    generators::RecursiveBacktracker,
    units::{Height, Width},
};

fn bench_recursive_backtracker_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_32", |b| {
        b.iter(|| {
            let mut generator = RecursiveBacktracker::new(Width(32),
                                                          Height(32),
                                                          Cartesian2DCoordinate::new(0, 0),
                                                          1234)
                .expect("valid bench parameters");
            while generator.step().still_advancing {}
            generator
        })
    });
}

fn bench_recursive_backtracker_ticks_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_ticks_32", |b| {
        b.iter(|| {
            let mut generator = RecursiveBacktracker::new(Width(32),
                                                          Height(32),
                                                          Cartesian2DCoordinate::new(0, 0),
                                                          1234)
                .expect("valid bench parameters");
            while generator.advance_tick() {}
            generator
        })
    });
}

criterion_group!(benches,
                 bench_recursive_backtracker_32,
                 bench_recursive_backtracker_ticks_32);
criterion_main!(benches);
