mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iso_contour::extract::{scan_level, scan_levels};
#[cfg(feature = "rayon")]
use iso_contour::runner::{ContourConfig, ContourRunner};

fn extract_single_level_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract/scan_level");

    for &n in &common::GRID_SIZES {
        let field = common::wavy_field(n);
        group.throughput(common::elements_throughput(field.cell_count()));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let segments = scan_level(&field, black_box(0.25));
                black_box(segments.len());
            });
        });
    }

    group.finish();
}

fn extract_many_levels_benches(c: &mut Criterion) {
    let levels = common::evenly_spaced_levels(16, -2.5, 2.5);
    let mut group = c.benchmark_group("extract/scan_levels_16");

    for &n in &common::GRID_SIZES[..2] {
        let field = common::wavy_field(n);
        group.throughput(common::elements_throughput(field.cell_count() * levels.len()));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| {
                let sets = scan_levels(&field, &levels);
                black_box(sets.len());
            });
        });

        // Without `rayon` the runner falls back to the sequential scan measured above.
        #[cfg(feature = "rayon")]
        {
            let runner = ContourRunner::new(&field, ContourConfig::new().with_parallel(true));
            group.bench_with_input(BenchmarkId::new("runner_parallel", n), &n, |b, _| {
                b.iter(|| {
                    let set = runner.segments(&levels);
                    black_box(set.segment_count());
                });
            });
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = extract_single_level_benches, extract_many_levels_benches
}
criterion_main!(benches);
