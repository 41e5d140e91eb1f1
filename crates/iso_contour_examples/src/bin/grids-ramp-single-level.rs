use iso_contour::prelude::*;
use iso_contour_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // z = x on a 10 x 5 grid with uneven rows; level 5 is a straight vertical line.
    let x_axis: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y_axis = vec![-3.0, -1.0, 0.5, 2.0, 8.0];
    let values: Vec<f64> = y_axis
        .iter()
        .flat_map(|_| x_axis.iter().copied())
        .collect();
    let (ny, nx) = (y_axis.len(), x_axis.len());

    let raw = contour_raw(&values, ny, nx, &y_axis, &x_axis, &[5.0])?;
    info!("Raw mode: {} segments.", raw.segment_count());
    for (k, [a, b]) in raw.segments()[0].iter().enumerate() {
        info!("  segment {k}: ({}, {}) -> ({}, {})", a.x, a.y, b.x, b.y);
    }

    let sorted = contour_sorted(&values, ny, nx, &y_axis, &x_axis, &[5.0])?;
    for line in &sorted.polylines()[0] {
        info!(
            "Sorted mode: {} points, closed = {}, length = {:.2}.",
            line.len(),
            line.is_closed(),
            line.length()
        );
    }

    // Mismatched axes abort before extraction and map to a non-zero status.
    let mismatch = contour_raw(&values, ny, nx + 1, &y_axis, &x_axis, &[5.0]);
    info!("Mismatched axes: status {}.", status_code(&mismatch));

    Ok(())
}
