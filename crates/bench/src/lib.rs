use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const SMALL_INPUT_MAX_LEN: usize = 4_096;
const MEDIUM_INPUT_MAX_LEN: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset matching an input of `len` elements.
pub fn apply_runtime_config_for_len<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    len: usize,
) {
    if len <= SMALL_INPUT_MAX_LEN {
        apply_small_runtime_config(group);
    } else if len <= MEDIUM_INPUT_MAX_LEN {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `0..distinct`.
///
/// A small `distinct` produces many duplicates, which is what the
/// hash-based operations are sensitive to.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    debug_assert!(distinct > 0);
    (0..len).map(|_| rng.random_range(0..distinct)).collect()
}

/// `parts` sequences whose lengths sum to roughly `total_len`.
pub fn random_nested<R: Rng + ?Sized>(
    rng: &mut R,
    total_len: usize,
    parts: usize,
    distinct: u64,
) -> Vec<Vec<u64>> {
    let parts = parts.max(1);
    let mean = total_len / parts;
    (0..parts)
        .map(|_| {
            let len = if mean == 0 {
                0
            } else {
                rng.random_range(0..=2 * mean)
            };
            random_sequence(&mut *rng, len, distinct)
        })
        .collect()
}
