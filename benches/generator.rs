//! Generator benchmark: random draw with jitter, exact lookup, and the full inject path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sundus::events::AnomalyGenerator;
use sundus::session::Session;
use sundus::tiers::TieredLogicEngine;

fn bench_generate_random(c: &mut Criterion) {
    let generator = AnomalyGenerator::new();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("generate_random_builtin", |b| {
        b.iter(|| black_box(generator.generate_random_with(&mut rng)))
    });
}

fn bench_get_by_id(c: &mut Criterion) {
    let generator = AnomalyGenerator::new();
    c.bench_function("get_by_id_last_row", |b| b.iter(|| generator.get_by_id(black_box("C-03"))));
}

fn bench_inject(c: &mut Criterion) {
    c.bench_function("session_inject_50", |b| {
        b.iter(|| {
            let mut session = Session::new(TieredLogicEngine::default(), Some(AnomalyGenerator::new()));
            for _ in 0..50 {
                session.inject_random();
            }
            black_box(session.history().len())
        })
    });
}

criterion_group!(benches, bench_generate_random, bench_get_by_id, bench_inject);
criterion_main!(benches);
