use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crossbook::{MatchingEngine, NewOrder};

const TRADERS: [&str; 8] = ["T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8"];

fn bench_matching(c: &mut Criterion) {
    c.bench_function("match_100k_orders", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new();
            let mut rng = StdRng::seed_from_u64(42);
            for i in 0..100_000u64 {
                let trader = TRADERS[rng.gen_range(0..TRADERS.len())];
                let price = 100 + rng.gen_range(0..10);
                let quantity = rng.gen_range(1..20);
                let order = if i % 2 == 0 {
                    NewOrder::buy(trader, quantity, price)
                } else {
                    NewOrder::sell(trader, quantity, price)
                };
                let _ = engine.submit(order);
            }
            engine.trades().len()
        })
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
