//! Marching-squares extraction of iso-line segments.
//!
//! - [`case_table`]: static 16-entry corner-mask table and saddle pairings.
//! - [`cell`]: classification and edge interpolation for a single grid cell.
//! - [`scanner`]: drives the cell extractor over every cell of a [`crate::field::GridField`].
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod case_table;
pub mod cell;
pub mod scanner;

pub use case_table::{CellCase, Edge, EdgePair};
pub use cell::{extract_cell, Cell, CellSegments};
#[cfg(feature = "rayon")]
pub use scanner::scan_levels_par;
pub use scanner::{scan_level, scan_level_into, scan_levels};

/// A straight piece of iso-line inside one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    /// Level that produced this segment.
    pub level: f64,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2, level: f64) -> Self {
        Self { start, end, level }
    }

    /// Both endpoints, start first.
    #[inline]
    pub fn endpoints(&self) -> [DVec2; 2] {
        [self.start, self.end]
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Same segment traversed end to start.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            level: self.level,
        }
    }
}

/// Unordered segments extracted for one level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelSegments {
    pub level: f64,
    pub segments: Vec<Segment>,
}

impl LevelSegments {
    pub fn new(level: f64, segments: Vec<Segment>) -> Self {
        Self { level, segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
