// Retrain and query cost as the catalog grows
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_core::{CatalogRecord, RecommenderConfig, Snapshot};
use folio_storage::{ModelManager, StaticSource};
use rand::prelude::*;
use std::sync::Arc;

const WORDS: &[&str] = &[
    "dune", "messiah", "scifi", "cooking", "italian", "pasta", "history", "rome",
    "garden", "poetry", "ocean", "mystery", "dragon", "empire", "river", "winter",
    "castle", "voyage", "shadow", "science", "kingdom", "letters", "machine", "island",
];

fn generate_catalog(size: usize) -> Vec<CatalogRecord> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    (0..size)
        .map(|i| {
            let title: Vec<&str> = (0..rng.random_range(1..5))
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            CatalogRecord::new(
                format!("isbn-{}", i),
                title.join(" "),
                WORDS[rng.random_range(0..WORDS.len())],
            )
            .with_author(format!("Author{}", rng.random_range(0..size / 10 + 1)))
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for size in [100, 1000, 3000].iter() {
        let records = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("snapshot", size), &records, |b, records| {
            b.iter(|| {
                let config = RecommenderConfig::default();
                black_box(Snapshot::build(records.clone(), &config).unwrap())
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000, 3000].iter() {
        let source = Arc::new(StaticSource::new(generate_catalog(*size)));
        let manager = ModelManager::new(source, RecommenderConfig::default()).unwrap();
        manager.retrain().unwrap();

        group.bench_with_input(BenchmarkId::new("top5", size), size, |b, &size| {
            let mut i = 0;
            b.iter(|| {
                let id = format!("isbn-{}", i % size);
                i += 1;
                black_box(manager.recommend(&id).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
