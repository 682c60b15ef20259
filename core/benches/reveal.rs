use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(&str, GameConfig); 3] = [
    ("beginner", GameConfig::new_unchecked(9, 9, 10)),
    ("expert", GameConfig::new_unchecked(16, 30, 99)),
    ("dense", GameConfig::new_unchecked(64, 64, 3200)),
];

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, config) in TIERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut placer = RandomPlacer::from_seed(seed);
                black_box(placer.place(config).unwrap())
            });
        });
    }
    group.finish();
}

fn cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for size in [64, 256, 1024] {
        let config = GameConfig::new(size, size, 1).unwrap();
        let corner = (size - 1, size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            b.iter(|| {
                let mut session =
                    Session::with_placer(config, FixedPlacer::new([corner]), ManualClock::new())
                        .unwrap();
                black_box(session.reveal((0, 0)).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, placement, cascade);
criterion_main!(benches);
