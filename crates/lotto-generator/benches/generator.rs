//! Benchmarks for lottery draw generation.
//!
//! # Benchmarks
//!
//! - **`generator_6_of_49`**: Classic 6-of-49 draws.
//! - **`generator_20_of_80`**: Keno-style 20-of-80 draws.
//!
//! Seeds are fixed so results are reproducible between runs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lotto_core::{PickerConfig, PoolRange};
use lotto_generator::{DrawGenerator, DrawSeed};

const SEEDS: [&str; 2] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_config(c: &mut Criterion, name: &str, config: &PickerConfig) {
    let generator = DrawGenerator::new(config);
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = DrawSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter(|| hint::black_box(generator.generate_with_seed(hint::black_box(*seed))));
        });
    }
}

fn bench_generator(c: &mut Criterion) {
    let classic = PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap();
    bench_config(c, "generator_6_of_49", &classic);

    let keno = PickerConfig::new(PoolRange::new(1, 80), 20, 20).unwrap();
    bench_config(c, "generator_20_of_80", &keno);
}

criterion_group!(benches, bench_generator);
criterion_main!(benches);
