use std::f64::consts::PI;
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

const WAVE_CYCLES: u32 = 10;
const WAVE_AMPLITUDE: f64 = 100_000.0;
const IDENTICAL_VALUE: u32 = 1_234_567;

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

pub fn apply_runtime_config_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 16_384 {
        apply_small_runtime_config(group);
    } else if len <= 262_144 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

/// Synthetic input shapes for sort benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Sorted,
    Reversed,
    /// Inverted sine wave whose amplitude grows with the phase.
    SineWave,
    /// Inverted sine wave with a fixed amplitude.
    Chainsaw,
    Identical,
}

pub const ALL_PATTERNS: [Pattern; 6] = [
    Pattern::Random,
    Pattern::Sorted,
    Pattern::Reversed,
    Pattern::SineWave,
    Pattern::Chainsaw,
    Pattern::Identical,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::SineWave => "sinwave",
            Self::Chainsaw => "chainsaw",
            Self::Identical => "identical",
        }
    }
}

pub fn generate(pattern: Pattern, len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    match pattern {
        Pattern::Random => (0..len).map(|_| rng.random::<u32>()).collect(),
        Pattern::Sorted => {
            let mut data: Vec<u32> = (0..len).map(|_| rng.random::<u32>()).collect();
            data.sort_unstable();
            data
        }
        Pattern::Reversed => {
            let mut data: Vec<u32> = (0..len).map(|_| rng.random::<u32>()).collect();
            data.sort_unstable_by(|a, b| b.cmp(a));
            data
        }
        Pattern::SineWave => wave(len, |x| (x.sin() + 1.0) * WAVE_AMPLITUDE * x),
        Pattern::Chainsaw => wave(len, |x| (x.sin() + 1.0) * WAVE_AMPLITUDE),
        Pattern::Identical => vec![IDENTICAL_VALUE; len],
    }
}

fn wave(len: usize, height: impl Fn(f64) -> f64) -> Vec<u32> {
    if len == 0 {
        return Vec::new();
    }

    let delta = 2.0 * f64::from(WAVE_CYCLES) * PI / len as f64;
    let mut x = 0.0;
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        x += delta;
        // Float-to-int `as` saturates, so oversized heights clamp to u32::MAX.
        data.push(u32::MAX - height(x) as u32);
    }
    data
}
