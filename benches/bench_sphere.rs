use bitga::{
    evolution::{EvolutionLauncher, EvolutionOptions},
    rng::RandomNumberGenerator,
    Bounds,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_run");
    for size in [10, 50, 200].iter() {
        let launcher = EvolutionLauncher::builder()
            .with_objective(sphere as fn(&[f64]) -> f64)
            .with_bounds(Bounds::new(vec![(-5.0, 5.0); 4]).unwrap())
            .with_options(
                EvolutionOptions::builder()
                    .population_size(*size)
                    .genes_per_variable(16)
                    .max_generations(50)
                    .build(),
            )
            .build()
            .unwrap();

        group.bench_function(&format!("sphere_population_{}", size), |b| {
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| {
                let result = launcher.evolve(black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere);
criterion_main!(benches);
