mod common;

use common::random_baskets;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eclat::{derive_all_rules, Eclat, EclatConfig, ObservationTable};

fn mine(observations: &ObservationTable<usize, usize>, min_support: f64) -> usize {
    Eclat::new(EclatConfig::new(min_support))
        .mine(observations, "item")
        .unwrap()
        .len()
}

fn bench_eclat_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("eclat_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let observations = random_baskets(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &observations, |b, obs| {
            b.iter(|| mine(black_box(obs), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_eclat_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("eclat_min_support");

    let observations = random_baskets(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| mine(black_box(&observations), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_eclat_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("eclat_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let observations = random_baskets(1000, 50, 10, density);

        group.bench_with_input(BenchmarkId::from_parameter(name), &observations, |b, obs| {
            b.iter(|| mine(black_box(obs), black_box(0.1)));
        });
    }

    group.finish();
}

/// Rule derivation over an already mined table
fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    let grocery = random_baskets(1000, 30, 8, 0.8);
    let table = Eclat::new(EclatConfig::new(0.05)).mine(&grocery, "item").unwrap();

    group.bench_function("grocery_pattern", |b| {
        b.iter(|| derive_all_rules(black_box(&table)).unwrap().len());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_eclat_scaling,
    bench_eclat_min_support,
    bench_eclat_density,
    bench_rules
);
criterion_main!(benches);
