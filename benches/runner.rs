use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use banditlab::{SimulationConfig, StrategySpec};
use std::hint::black_box;

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    for &num_steps in &[100usize, 1_000usize] {
        let cfg = SimulationConfig {
            probabilities: vec![0.05, 0.1, 0.3, 0.6, 0.9],
            strategies: vec![
                StrategySpec::UniformRandom,
                StrategySpec::EpsilonGreedy { epsilon: 0.1 },
                StrategySpec::ThompsonSampling {
                    alpha: 1.0,
                    beta: 1.0,
                },
                StrategySpec::Ucb1,
                StrategySpec::Ucb1Tuned,
            ],
            num_steps,
            num_trials: 5,
            seed: 42,
        };
        group.bench_with_input(
            BenchmarkId::new("five_strategies", num_steps),
            &cfg,
            |b, cfg| {
                b.iter(|| {
                    let series = black_box(cfg).run().unwrap();
                    black_box(series);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
