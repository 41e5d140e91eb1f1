#![forbid(unsafe_code)]
//! iso_contour: Iso-contour extraction on rectilinear grids.
//!
//! Modules:
//! - field: sampled scalar grids with per-axis coordinates
//! - extract: marching-squares cell cases and per-level scanning
//! - stitch: chaining unordered segments into open and closed polylines
//! - assemble: per-level result sets and the flat raw/sorted output buffers
//! - runner: configuration, runner, and top-level entry points
//! - events: observing runs through event sinks
//!
//! For examples and docs, see README and docs.rs.
pub mod assemble;
pub mod error;
pub mod events;
pub mod extract;
pub mod field;
pub mod runner;
pub mod stitch;

/// Convenient re-exports for common types. Import with `use iso_contour::prelude::*;`.
pub mod prelude {
    pub use crate::assemble::{ContourSet, LevelContours, RawContours, SegmentSet, SortedContours};
    pub use crate::error::{status_code, Axis, Error, Result, STATUS_OK};
    pub use crate::events::{ContourEvent, ContourEventKind, EventSink, FnSink, MultiSink, VecSink};
    pub use crate::extract::{extract_cell, scan_level, scan_levels, Cell, LevelSegments, Segment};
    pub use crate::field::GridField;
    pub use crate::runner::{
        contour_polylines, contour_raw, contour_segments, contour_sorted, run_polylines,
        run_segments, ContourConfig, ContourRunner, RunSummary,
    };
    pub use crate::stitch::{stitch, stitch_with, Polyline, StitchStrategy};
}
