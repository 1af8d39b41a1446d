mod common;

use common::random_baskets;
use eclat::{Eclat, EclatConfig, IterationBudget, ObservationTable};
use std::time::Instant;

fn run(observations: &ObservationTable<usize, usize>, config: EclatConfig) {
    let start = Instant::now();
    match Eclat::new(config).mine(observations, "item") {
        Ok(table) => {
            println!("  Time: {:?}", start.elapsed());
            println!("  Itemsets: {}", table.len());
            println!("  Max itemset size: {}", table.max_itemset_size());

            if table.len() > 1_000_000 {
                println!("  ⚠ Pattern explosion detected!");
            }
        }
        Err(err) => println!("  ✗ Failed: {}", err),
    }
}

fn stress_test_extreme_low_support() {
    println!("\n=== Extreme Low Support Test ===");

    let observations = random_baskets(20_000, 100, 20, 0.6);

    for &min_support in &[0.05, 0.02, 0.01, 0.005] {
        println!("\nTesting min_support = {}", min_support);
        run(&observations, EclatConfig::new(min_support));
    }
}

fn stress_test_dense_budget() {
    println!("\n=== Dense Data Under Iteration Budget ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        let observations = random_baskets(num_tx, num_items, avg_size, density);

        for budget in [IterationBudget::bounded(1_000), IterationBudget::bounded(100_000)] {
            println!("\nTesting: {} with {:?}", name, budget);
            run(&observations, EclatConfig::new(0.1).with_budget(budget));
        }
    }
}

fn main() {
    println!("=== ECLAT Stress Testing Suite ===");

    stress_test_extreme_low_support();
    stress_test_dense_budget();

    println!("\n=== Stress Testing Complete ===");
}
