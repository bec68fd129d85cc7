use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{ALL_PATTERNS, Pattern, apply_runtime_config_for_len, generate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sort::{SortAlgorithm, algorithm_name, all_algorithms, is_sorted_by, sort_u32};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

fn bench_sort(c: &mut Criterion) {
    for &pattern in &ALL_PATTERNS {
        let mut group = c.benchmark_group(format!("sort/{}", pattern.label()));

        for &algo in all_algorithms() {
            for &size in &BENCH_SIZES {
                apply_runtime_config_for_len(&mut group, size);
                let base = generate(pattern, size, seed_for(pattern, size, algo as u64));
                assert!(verify(algo, &base), "algorithm={}", algorithm_name(algo));

                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort_u32(algo, &mut data).unwrap();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        group.finish();
    }
}

fn verify(algo: SortAlgorithm, base: &[u32]) -> bool {
    let mut data = base.to_vec();
    sort_u32(algo, &mut data).is_ok() && is_sorted_by(&data, &heap::NaturalOrder)
}

#[inline]
fn seed_for(pattern: Pattern, size: usize, salt: u64) -> u64 {
    let p = pattern as u64 + 11;
    mix_seed(0x5EED_2026 ^ (p << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
