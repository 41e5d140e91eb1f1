#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use iso_contour::field::GridField;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const GRID_SIZES: [usize; 3] = [64, 256, 1024];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Sum of a few interfering waves on `[0, 10]^2`, values roughly in `[-3, 3]`.
pub fn wavy_field(n: usize) -> GridField<'static> {
    let axis: Vec<f64> = (0..n)
        .map(|i| 10.0 * i as f64 / (n.max(2) - 1) as f64)
        .collect();
    GridField::from_fn(axis.clone(), axis, |x, y| {
        (1.3 * x).sin() + (0.7 * y).cos() + (0.4 * (x + y)).sin()
    })
    .expect("benchmark grid is valid")
}

pub fn evenly_spaced_levels(count: usize, min: f64, max: f64) -> Vec<f64> {
    (0..count)
        .map(|i| min + (max - min) * (i as f64 + 0.5) / count as f64)
        .collect()
}
