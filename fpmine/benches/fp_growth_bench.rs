use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fpmine::fp::{FPTree, ItemEncoder, MiningConfig, fp_growth};
use rand::Rng;

/// Generate synthetic transactions, already encoded by descending frequency
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut rng = rand::thread_rng();
    let mut raw = Vec::with_capacity(num_transactions);

    for _ in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        let mut transaction = Vec::with_capacity(num_items_in_tx);
        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                transaction.push(rng.gen_range(0..num_items));
            }
        }
        raw.push(transaction);
    }

    ItemEncoder::fit(&raw).encode_all(&raw)
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let config = MiningConfig::fraction(0.1).with_integrity_checks(false);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| fp_growth(black_box(tx), black_box(&config)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let config = MiningConfig::fraction(min_sup).with_integrity_checks(false);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &config,
            |b, config| {
                b.iter(|| fp_growth(black_box(&transactions), black_box(config)));
            },
        );
    }

    group.finish();
}

/// Sequential against rayon-parallel top-level mining
fn bench_fp_growth_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_parallel");

    let transactions = generate_transactions(2000, 60, 12, 0.8);
    for parallel in [false, true] {
        let config = MiningConfig::fraction(0.05)
            .with_integrity_checks(false)
            .with_parallel(parallel);
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &config,
            |b, config| {
                b.iter(|| fp_growth(black_box(&transactions), black_box(config)));
            },
        );
    }

    group.finish();
}

/// Conditional tree extraction on its own
fn bench_cut(c: &mut Criterion) {
    let transactions = generate_transactions(2000, 60, 12, 0.8);
    let mut tree = FPTree::from_transactions(&transactions, 20).unwrap();
    tree.prune();
    let items = tree.frequent_items();

    c.bench_function("cut_all_frequent_items", |b| {
        b.iter(|| {
            for &item in &items {
                black_box(tree.cut(item).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_parallel,
    bench_cut
);
criterion_main!(benches);
