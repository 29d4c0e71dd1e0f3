use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdlp::discretize::{BinDiscretizer, BinStrategy, Discretizer, Mdlp};
use rand::prelude::*;

fn bench_discretize(c: &mut Criterion) {
    let mut group = c.benchmark_group("discretize");

    // Three overlapping classes along one feature.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 2000;
    let labels: Vec<i32> = (0..n).map(|_| rng.random_range(0..3)).collect();
    let values: Vec<f32> = labels
        .iter()
        .map(|&l| l as f32 * 2.0 + rng.random::<f32>() * 3.0)
        .collect();

    group.bench_function("mdlp_fit_n2000_c3", |b| {
        b.iter(|| {
            let mut model = Mdlp::new();
            model.fit(black_box(&values), black_box(&labels)).unwrap();
        })
    });

    group.bench_function("quantile_fit_n2000_b10", |b| {
        b.iter(|| {
            let mut model = BinDiscretizer::new(10, BinStrategy::Quantile);
            model.fit(black_box(&values), &[]).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_discretize);
criterion_main!(benches);
