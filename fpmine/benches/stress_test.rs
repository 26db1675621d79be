use fpmine::fp::{ItemEncoder, MiningConfig, fp_growth, matrix_to_transactions};
use ndarray::Array2;
use rand::Rng;
use std::time::{Duration, Instant};

fn generate_matrix(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

fn encoded(matrix: &Array2<i32>) -> Vec<Vec<usize>> {
    let rows = matrix_to_transactions(matrix.view());
    ItemEncoder::fit(&rows).encode_all(&rows)
}

fn run(name: &str, transactions: &[Vec<usize>], config: &MiningConfig) {
    let start = Instant::now();
    match fp_growth(transactions, config) {
        Ok(result) => {
            println!("  {}: {:?}", name, start.elapsed());
            println!("    Patterns: {}", result.len());
            println!("    Max itemset size: {}", result.levels.len());
            if result.truncated {
                println!("    (stopped early)");
            }
        }
        Err(e) => println!("  {}: failed: {}", name, e),
    }
}

fn stress_test_scaling() {
    println!("\n=== Scaling Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let transactions = encoded(&generate_matrix(num_tx, num_items, avg_size, 0.7));
        let config = MiningConfig::fraction(0.05).with_integrity_checks(false);
        run("sequential", &transactions, &config);
        run("parallel", &transactions, &config.clone().with_parallel(true));
    }
}

fn stress_test_low_support_with_limits() {
    println!("\n=== Low Support With Limits ===");

    let transactions = encoded(&generate_matrix(20_000, 100, 20, 0.6));

    for &min_support in &[0.05, 0.02, 0.01] {
        println!("\nTesting min_support = {}", min_support);
        let config = MiningConfig::fraction(min_support)
            .with_integrity_checks(false)
            .with_parallel(true)
            .with_max_itemsets(1_000_000)
            .with_time_limit(Duration::from_secs(60));
        run("bounded", &transactions, &config);
    }
}

fn stress_test_integrity_overhead() {
    println!("\n=== Integrity Check Overhead ===");

    let transactions = encoded(&generate_matrix(5_000, 40, 12, 0.8));
    let config = MiningConfig::fraction(0.05);
    run("unchecked", &transactions, &config.clone().with_integrity_checks(false));
    run("checked", &transactions, &config.with_integrity_checks(true));
}

fn main() {
    println!("=== FP-Growth Stress Testing Suite ===");

    stress_test_scaling();
    stress_test_low_support_with_limits();
    stress_test_integrity_overhead();

    println!("\n=== Stress Testing Complete ===");
}
