use iso_contour::prelude::*;
use iso_contour_examples::{init_tracing, render_contours_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let n = 200;
    let axis: Vec<f64> = (0..n)
        .map(|i| -3.0 + 6.0 * i as f64 / (n - 1) as f64)
        .collect();
    let field = GridField::from_fn(axis.clone(), axis, peaks)?;

    let levels: Vec<f64> = (-6..=8).map(|k| k as f64 + 0.5).collect();

    let mut sink = VecSink::only([ContourEventKind::LevelStitched]);
    let runner = ContourRunner::try_new(&field, ContourConfig::new().with_parallel(true))?;
    let contours = runner.polylines_with_events(&levels, &mut sink);

    for event in sink.as_slice() {
        if let ContourEvent::LevelStitched {
            level,
            polylines,
            closed,
            ..
        } = event
        {
            info!("Level {level:>5.1}: {polylines} polylines, {closed} closed.");
        }
    }

    let rc = RenderConfig::new((800, 800), &field).with_background([245, 245, 240]);
    render_contours_to_png(&contours, &rc, "grids-peaks-sorted.png")?;

    Ok(())
}

// The classic "peaks" surface: a few Gaussian bumps and a dip.
fn peaks(x: f64, y: f64) -> f64 {
    3.0 * (1.0 - x).powi(2) * (-(x * x) - (y + 1.0).powi(2)).exp()
        - 10.0 * (x / 5.0 - x.powi(3) - y.powi(5)) * (-(x * x) - y * y).exp()
        - 1.0 / 3.0 * (-(x + 1.0).powi(2) - y * y).exp()
}
