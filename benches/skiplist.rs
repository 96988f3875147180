//! Benchmarks for this crate's [`SkipList`].

use criterion::{AxisScale, BatchSize, BenchmarkId, Criterion, PlotConfiguration, black_box};
use leveled_skiplist::SkipList;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Benchmarking sizes.
const SIZES: [usize; 5] = [1, 10, 100, 1000, 10_000];

fn random_list(rng: &mut SmallRng, size: usize) -> SkipList<u64> {
    std::iter::repeat_with(|| rng.random()).take(size).collect()
}

/// Benchmarking insertion into a list of a given size.
#[inline]
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = SmallRng::seed_from_u64(0x1234_abcd);
            let mut sl = random_list(&mut rng, size);

            b.iter(|| {
                sl.insert(rng.random());
            });
        });
    }
}

/// Benchmarking membership tests, half of which miss.
#[inline]
pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Contains");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = SmallRng::seed_from_u64(0x1234_abcd);
            let values: Vec<u64> = std::iter::repeat_with(|| rng.random_range(0..2 * size as u64))
                .take(size)
                .collect();
            let sl: SkipList<u64> = values.iter().copied().filter(|v| v % 2 == 0).collect();

            b.iter(|| {
                for v in &values {
                    black_box(sl.contains(v));
                }
            });
        });
    }
}

/// Benchmarking iteration.
#[inline]
pub fn iter(c: &mut Criterion) {
    c.bench_function("SkipList Iter", |b| {
        let mut rng = SmallRng::seed_from_u64(0x1234_abcd);
        let sl = random_list(&mut rng, 100_000);

        b.iter(|| {
            for el in &sl {
                black_box(el);
            }
        });
    });
}

/// Benchmarking a full pass of a cursor removing every other element.
#[inline]
pub fn cursor_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Cursor Remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = SmallRng::seed_from_u64(0x1234_abcd);
            let sl = random_list(&mut rng, size);

            b.iter_batched(
                || sl.iter().copied().collect::<SkipList<u64>>(),
                |mut sl| {
                    let mut cursor = sl.cursor_mut();
                    let mut keep = false;
                    while cursor.next().is_ok() {
                        if !keep {
                            black_box(cursor.remove()).ok();
                        }
                        keep = !keep;
                    }
                    sl
                },
                BatchSize::SmallInput,
            );
        });
    }
}
