use criterion::{criterion_group, criterion_main, Criterion};
use mazetrace::{
    cells::Cartesian2DCoordinate,
    generators::RecursiveBacktracker,
    pathing::GoalTracker,
    units::{Height, Width},
};

fn completed_generator() -> RecursiveBacktracker {
    let mut generator = RecursiveBacktracker::new(Width(32),
                                                  Height(32),
                                                  Cartesian2DCoordinate::new(0, 0),
                                                  1234)
        .expect("valid bench parameters");
    while generator.step().still_advancing {}
    generator
}

fn bench_goal_scan_32(c: &mut Criterion) {
    let generator = completed_generator();
    // The cursor cell is always on the stack, so every scan walks and records a path.
    let goal = *generator.stack().last().expect("stack is never empty");

    c.bench_function("goal_scan_32", move |b| {
        b.iter(|| {
            let mut tracker = GoalTracker::new();
            tracker.check_goal_reached(generator.stack(), goal)
        })
    });
}

fn bench_goal_scan_cached_32(c: &mut Criterion) {
    let generator = completed_generator();
    let goal = *generator.stack().last().expect("stack is never empty");
    let mut tracker = GoalTracker::new();
    tracker.check_goal_reached(generator.stack(), goal);

    c.bench_function("goal_scan_cached_32", move |b| {
        b.iter(|| tracker.check_goal_reached(generator.stack(), goal))
    });
}

criterion_group!(benches, bench_goal_scan_32, bench_goal_scan_cached_32);
criterion_main!(benches);
