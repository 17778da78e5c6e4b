//! Criterion benchmarks for place ranking.
//!
//! Compares ranking a catalogue with the plain linear matcher against a warm
//! memoised matcher, across catalogue sizes of 100, 1 000, and 10 000 places.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package wayfarer-ranker
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfarer_core::test_support::{place_from_values, preferences_from_values};
use wayfarer_core::{LinearMatcher, PlaceAttributes};
use wayfarer_ranker::{DEFAULT_CACHE_CAPACITY, MemoizedMatcher, RankOptions, rank_places};

/// Seed for deterministic catalogue generation.
const BENCHMARK_SEED: u64 = 42;

/// Catalogue sizes to benchmark.
const CATALOGUE_SIZES: &[usize] = &[100, 1_000, 10_000];

fn generate_catalogue(count: usize, seed: u64) -> Vec<PlaceAttributes> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let values: [f32; 6] = std::array::from_fn(|_| rng.gen_range(0.0_f32..=100.0_f32));
            place_from_values(&format!("place-{index}"), values)
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_places");
    let preferences = preferences_from_values([80.0, 20.0, 50.0, 50.0, 50.0, 50.0]);
    let options = RankOptions::default();

    for &size in CATALOGUE_SIZES {
        let catalogue = generate_catalogue(size, BENCHMARK_SEED);
        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| rank_places(&LinearMatcher, &preferences, &catalogue, options));
        });

        let memoised = MemoizedMatcher::new(LinearMatcher, DEFAULT_CACHE_CAPACITY);
        #[expect(
            clippy::let_underscore_must_use,
            reason = "warming the cache; the page itself is not needed"
        )]
        let _ = rank_places(&memoised, &preferences, &catalogue, options);
        group.bench_with_input(BenchmarkId::new("memoised", size), &size, |b, _| {
            b.iter(|| rank_places(&memoised, &preferences, &catalogue, options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
