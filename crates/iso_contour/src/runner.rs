//! High-level runner tying together level scanning, stitching and result assembly.
use tracing::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assemble::{ContourSet, LevelContours, RawContours, SegmentSet, SortedContours};
use crate::error::{Error, Result};
use crate::events::{ContourEvent, ContourEventKind, EventSink};
use crate::extract::{scan_levels, LevelSegments};
use crate::field::GridField;
use crate::stitch::{stitch_with, StitchStrategy};

/// Configuration for contour runs.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContourConfig {
    /// How the stitcher finds adjacent segments.
    pub stitch_strategy: StitchStrategy,
    /// Scan levels concurrently. Needs the `rayon` feature; ignored with a warning otherwise.
    pub parallel: bool,
    /// Collinear simplification tolerance applied to stitched polylines; `None` disables it.
    ///
    /// Simplified polylines no longer contain every raw segment endpoint.
    pub simplify_tolerance: Option<f64>,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            stitch_strategy: StitchStrategy::Indexed,
            parallel: false,
            simplify_tolerance: None,
        }
    }
}

impl ContourConfig {
    /// Creates a new [`ContourConfig`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stitch strategy.
    pub fn with_stitch_strategy(mut self, stitch_strategy: StitchStrategy) -> Self {
        self.stitch_strategy = stitch_strategy;
        self
    }

    /// Enables or disables concurrent level scanning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the collinear simplification tolerance.
    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Self {
        self.simplify_tolerance = Some(tolerance);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.simplify_tolerance {
            if !t.is_finite() || t < 0.0 {
                return Err(Error::InvalidConfig(
                    "simplify_tolerance must be finite and >= 0".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    pub levels: usize,
    pub segments: usize,
    /// Zero for raw-mode runs.
    pub polylines: usize,
    pub closed: usize,
}

/// Runs contour extraction over one field with a fixed configuration.
pub struct ContourRunner<'a> {
    /// Configuration applied to every run.
    pub config: ContourConfig,
    /// Field being contoured.
    pub field: &'a GridField<'a>,
}

impl<'a> ContourRunner<'a> {
    pub fn try_new(field: &'a GridField<'a>, config: ContourConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, field })
    }

    pub fn new(field: &'a GridField<'a>, config: ContourConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "simplify_tolerance must be finite and >= 0"
        );
        Self { config, field }
    }

    /// Unordered segments per level.
    pub fn segments(&self, levels: &[f64]) -> SegmentSet {
        run_segments(self.field, levels, &self.config, None)
    }

    pub fn segments_with_events(&self, levels: &[f64], sink: &mut dyn EventSink) -> SegmentSet {
        run_segments(self.field, levels, &self.config, Some(sink))
    }

    /// Stitched polylines per level.
    pub fn polylines(&self, levels: &[f64]) -> ContourSet {
        run_polylines(self.field, levels, &self.config, None)
    }

    pub fn polylines_with_events(&self, levels: &[f64], sink: &mut dyn EventSink) -> ContourSet {
        run_polylines(self.field, levels, &self.config, Some(sink))
    }

    /// Raw-mode flat output.
    pub fn raw(&self, levels: &[f64]) -> RawContours {
        self.segments(levels).to_raw()
    }

    /// Sorted-mode flat output.
    pub fn sorted(&self, levels: &[f64]) -> SortedContours {
        self.polylines(levels).to_sorted()
    }
}

/// Extracts the segments of every level.
pub fn run_segments(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: Option<&mut dyn EventSink>,
) -> SegmentSet {
    match sink {
        Some(s) => run_segments_internal(field, levels, config, s),
        None => run_segments_internal(field, levels, config, &mut ()),
    }
}

/// Extracts and stitches the contours of every level.
pub fn run_polylines(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: Option<&mut dyn EventSink>,
) -> ContourSet {
    match sink {
        Some(s) => run_polylines_internal(field, levels, config, s),
        None => run_polylines_internal(field, levels, config, &mut ()),
    }
}

fn run_segments_internal(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: &mut dyn EventSink,
) -> SegmentSet {
    let set = extract_levels(field, levels, config, sink);
    let summary = RunSummary {
        levels: set.len(),
        segments: set.segment_count(),
        ..RunSummary::default()
    };
    finish(summary, sink);
    set
}

fn run_polylines_internal(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: &mut dyn EventSink,
) -> ContourSet {
    let set = extract_levels(field, levels, config, sink);

    let mut contours = Vec::with_capacity(set.len());
    for (index, level) in set.iter().enumerate() {
        let mut polylines = stitch_with(&level.segments, config.stitch_strategy);
        if let Some(tolerance) = config.simplify_tolerance {
            polylines = polylines
                .iter()
                .map(|p| p.simplify_collinear(tolerance))
                .collect();
        }
        let stitched = LevelContours::new(level.level, polylines);
        if sink.wants(ContourEventKind::LevelStitched) {
            sink.send(ContourEvent::LevelStitched {
                index,
                level: stitched.level,
                polylines: stitched.polylines.len(),
                closed: stitched.closed_count(),
            });
        }
        contours.push(stitched);
    }
    let contours = ContourSet::new(contours);

    let summary = RunSummary {
        levels: set.len(),
        segments: set.segment_count(),
        polylines: contours.polyline_count(),
        closed: contours.iter().map(LevelContours::closed_count).sum(),
    };
    finish(summary, sink);
    contours
}

fn extract_levels(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: &mut dyn EventSink,
) -> SegmentSet {
    if sink.wants(ContourEventKind::RunStarted) {
        sink.send(ContourEvent::RunStarted {
            config: config.clone(),
            level_count: levels.len(),
            grid_size: (field.nx(), field.ny()),
        });
    }
    if levels.is_empty() {
        warn!("No contour levels requested.");
    }
    for (index, level) in levels.iter().enumerate() {
        if !level.is_finite() && sink.wants(ContourEventKind::Warning) {
            sink.send(ContourEvent::Warning {
                context: format!("level:{index}"),
                message: format!("Level {level} is not finite; no segments extracted"),
            });
        }
    }

    let scanned = scan(field, levels, config, sink);
    if sink.wants(ContourEventKind::LevelScanned) {
        for (index, level) in scanned.iter().enumerate() {
            sink.send(ContourEvent::LevelScanned {
                index,
                level: level.level,
                segments: level.len(),
            });
        }
    }
    SegmentSet::new(scanned)
}

#[cfg_attr(feature = "rayon", allow(unused_variables))]
fn scan(
    field: &GridField<'_>,
    levels: &[f64],
    config: &ContourConfig,
    sink: &mut dyn EventSink,
) -> Vec<LevelSegments> {
    if config.parallel {
        #[cfg(feature = "rayon")]
        return crate::extract::scan_levels_par(field, levels);
        #[cfg(not(feature = "rayon"))]
        {
            warn!("Parallel scanning requested without the `rayon` feature; scanning sequentially.");
            if sink.wants(ContourEventKind::Warning) {
                sink.send(ContourEvent::Warning {
                    context: "config".into(),
                    message: "parallel requires the `rayon` feature; scanned sequentially".into(),
                });
            }
        }
    }
    scan_levels(field, levels)
}

fn finish(summary: RunSummary, sink: &mut dyn EventSink) {
    info!(
        "Contoured {} levels: {} segments, {} polylines ({} closed).",
        summary.levels, summary.segments, summary.polylines, summary.closed
    );
    if sink.wants(ContourEventKind::RunFinished) {
        sink.send(ContourEvent::RunFinished { summary });
    }
}

/// Segments of `field` at every level, with the default configuration.
pub fn contour_segments(field: &GridField<'_>, levels: &[f64]) -> SegmentSet {
    run_segments(field, levels, &ContourConfig::default(), None)
}

/// Stitched polylines of `field` at every level, with the default configuration.
pub fn contour_polylines(field: &GridField<'_>, levels: &[f64]) -> ContourSet {
    run_polylines(field, levels, &ContourConfig::default(), None)
}

/// Raw-mode contours of a row-major sample buffer with `ny` rows and `nx` columns.
///
/// Inputs are validated before any extraction; on error no partial result is produced.
pub fn contour_raw(
    values: &[f64],
    ny: usize,
    nx: usize,
    y_axis: &[f64],
    x_axis: &[f64],
    levels: &[f64],
) -> Result<RawContours> {
    let field = GridField::with_dims(values, ny, nx, y_axis, x_axis)?;
    Ok(contour_segments(&field, levels).to_raw())
}

/// Sorted-mode contours of a row-major sample buffer with `ny` rows and `nx` columns.
///
/// Inputs are validated before any extraction; on error no partial result is produced.
pub fn contour_sorted(
    values: &[f64],
    ny: usize,
    nx: usize,
    y_axis: &[f64],
    x_axis: &[f64],
    levels: &[f64],
) -> Result<SortedContours> {
    let field = GridField::with_dims(values, ny, nx, y_axis, x_axis)?;
    Ok(contour_polylines(&field, levels).to_sorted())
}
