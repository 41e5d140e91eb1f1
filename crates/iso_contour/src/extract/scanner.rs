//! Level scanner: runs the cell extractor over every cell of a grid.
use tracing::{debug, warn};

use super::cell::{extract_cell, Cell};
use super::{LevelSegments, Segment};
use crate::field::GridField;

/// Extracts all segments of `field` at `level`.
///
/// Cells are visited row by row (`iy` outer, `ix` inner); the order of the returned segments is
/// not part of the contract.
pub fn scan_level(field: &GridField<'_>, level: f64) -> Vec<Segment> {
    let mut out = Vec::new();
    scan_level_into(field, level, &mut out);
    out
}

/// Appends all segments of `field` at `level` to `out`.
pub fn scan_level_into(field: &GridField<'_>, level: f64, out: &mut Vec<Segment>) {
    if !level.is_finite() {
        warn!("Level {} is not finite; it has no crossings.", level);
        return;
    }

    let before = out.len();
    for iy in 0..field.ny().saturating_sub(1) {
        for ix in 0..field.nx().saturating_sub(1) {
            let cell = Cell::from_field(field, ix, iy);
            out.extend_from_slice(extract_cell(&cell, level).as_slice());
        }
    }
    debug!(
        "Level {}: scanned {} cells, {} segments.",
        level,
        field.cell_count(),
        out.len() - before
    );
}

/// Extracts segments for every level, preserving the order of `levels`.
pub fn scan_levels(field: &GridField<'_>, levels: &[f64]) -> Vec<LevelSegments> {
    levels
        .iter()
        .map(|&level| LevelSegments::new(level, scan_level(field, level)))
        .collect()
}

/// Like [`scan_levels`], with levels distributed over the rayon thread pool.
///
/// Each level owns its output vector, so the result is identical to the sequential scan.
#[cfg(feature = "rayon")]
pub fn scan_levels_par(field: &GridField<'_>, levels: &[f64]) -> Vec<LevelSegments> {
    use rayon::prelude::*;

    levels
        .par_iter()
        .map(|&level| LevelSegments::new(level, scan_level(field, level)))
        .collect()
}
