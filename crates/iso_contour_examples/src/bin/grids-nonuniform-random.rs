use iso_contour::prelude::*;
use iso_contour_examples::{init_tracing, render_contours_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(42);
    let (nx, ny) = (60, 40);

    // Strictly increasing axes with random spacing.
    let x_axis = random_axis(&mut rng, nx);
    let y_axis = random_axis(&mut rng, ny);
    let values: Vec<f64> = (0..nx * ny).map(|_| unit(&mut rng)).collect();
    let field = GridField::new(&values, &x_axis, &y_axis)?;

    let levels = [0.25, 0.5, 0.75];
    let config = ContourConfig::new().with_simplify_tolerance(1e-9);
    let runner = ContourRunner::try_new(&field, config)?;

    let contours = runner.segments(&levels).stitch(StitchStrategy::Indexed);
    for level in contours.iter() {
        info!(
            "Level {:.2}: {} polylines ({} closed).",
            level.level,
            level.polylines.len(),
            level.closed_count()
        );
    }

    let simplified = runner.polylines(&levels);
    let before = contours.to_sorted().x.len();
    let after = simplified.to_sorted().x.len();
    info!("Collinear simplification: {before} -> {after} points.");

    let rc = RenderConfig::new((900, 600), &field).with_colors([20, 150, 90], [120, 30, 160]);
    render_contours_to_png(&contours, &rc, "grids-nonuniform-random.png")?;

    Ok(())
}

fn unit(rng: &mut impl Rng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

fn random_axis(rng: &mut impl Rng, n: usize) -> Vec<f64> {
    let mut acc = 0.0;
    (0..n)
        .map(|_| {
            let v = acc;
            acc += 0.2 + unit(rng);
            v
        })
        .collect()
}
