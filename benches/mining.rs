use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use apriori_hashtree::{apriori, AprioriConfig, ItemId};

/// Seeded synthetic baskets. Each transaction holds between `avg_size / 2`
/// and `avg_size * 3 / 2` draws, skewed towards low ids so that larger
/// itemsets become frequent.
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_size: usize,
) -> Vec<Vec<ItemId>> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..num_transactions)
        .map(|_| {
            let size = avg_size / 2 + rng.gen_range(0..=avg_size);
            (0..size)
                .map(|_| {
                    let a = rng.gen_range(0..num_items);
                    let b = rng.gen_range(0..num_items);
                    a.min(b)
                })
                .collect()
        })
        .collect()
}

fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_2000tx", 2000, 100, 12),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size);
        let config = AprioriConfig::new(0.05, 0.6);

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &transactions,
            |b, transactions| {
                b.iter(|| apriori(black_box(transactions), num_items, &config).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_split_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_threshold");
    let transactions = generate_transactions(1000, 60, 10);

    for max_leaf in [1, 3, 8, 32] {
        let config = AprioriConfig::new(0.05, 0.6).with_max_leaf(max_leaf);
        group.bench_with_input(BenchmarkId::from_parameter(max_leaf), &config, |b, config| {
            b.iter(|| apriori(black_box(&transactions), 60, config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apriori_scaling, bench_split_threshold);
criterion_main!(benches);
