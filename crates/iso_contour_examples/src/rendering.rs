use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};
use iso_contour::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call keeps the subscriber installed first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image size, data-space window and colours used when rasterizing contours.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub min: DVec2,
    pub max: DVec2,
    pub background: [u8; 3],
    /// Colour of the lowest level; the highest gets `high_color`, levels between are blended.
    pub low_color: [u8; 3],
    pub high_color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), field: &GridField<'_>) -> Self {
        let (x, y) = (field.x_axis(), field.y_axis());
        Self {
            image_size,
            min: DVec2::new(x[0], y[0]),
            max: DVec2::new(x[x.len() - 1], y[y.len() - 1]),
            background: [250, 250, 250],
            low_color: [40, 90, 220],
            high_color: [220, 60, 40],
        }
    }

    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    pub fn with_colors(mut self, low: [u8; 3], high: [u8; 3]) -> Self {
        self.low_color = low;
        self.high_color = high;
        self
    }

    fn to_pixel(&self, p: DVec2) -> (f64, f64) {
        let (w, h) = (self.image_size.0 as f64, self.image_size.1 as f64);
        let span = self.max - self.min;
        let span = DVec2::new(nonzero(span.x), nonzero(span.y));
        let t = (p - self.min) / span;
        // Image rows grow downwards.
        (t.x * (w - 1.0), (1.0 - t.y) * (h - 1.0))
    }

    fn level_color(&self, index: usize, count: usize) -> Rgb<u8> {
        let t = if count > 1 {
            index as f64 / (count - 1) as f64
        } else {
            0.5
        };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb([
            mix(self.low_color[0], self.high_color[0]),
            mix(self.low_color[1], self.high_color[1]),
            mix(self.low_color[2], self.high_color[2]),
        ])
    }
}

fn nonzero(v: f64) -> f64 {
    if v == 0.0 {
        1.0
    } else {
        v
    }
}

/// Draws every polyline of `contours` and writes the image as PNG.
pub fn render_contours_to_png(
    contours: &ContourSet,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));

    for (index, level) in contours.iter().enumerate() {
        let color = rc.level_color(index, contours.len());
        for line in &level.polylines {
            for (a, b) in line.segments() {
                draw_line(&mut img, rc.to_pixel(a), rc.to_pixel(b), color);
            }
        }
    }

    img.save(path.as_ref())?;
    info!("Wrote {}.", path.as_ref().display());
    Ok(())
}

fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), color: Rgb<u8>) {
    let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (a.0 + (b.0 - a.0) * t).round();
        let y = (a.1 + (b.1 - a.1) * t).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
