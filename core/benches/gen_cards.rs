use criterion::{Criterion, criterion_group, criterion_main};
use rasca_core::{BoardConfig, CardGenerator, RandomCardGenerator, TargetPlacement};

fn bench_generate(c: &mut Criterion) {
    let classic = BoardConfig::classic();
    c.bench_function("generate_classic_9x3", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            RandomCardGenerator::new(seed).generate(&classic).unwrap()
        })
    });

    let guaranteed = BoardConfig {
        target_placement: TargetPlacement::Guaranteed,
        ..BoardConfig::quota_rush()
    };
    c.bench_function("generate_quota_rush_9x3", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            RandomCardGenerator::new(seed).generate(&guaranteed).unwrap()
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
