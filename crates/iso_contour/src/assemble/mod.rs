//! Result assembly for the raw (segment) and sorted (polyline) output modes.
//!
//! Both modes derive from the same per-level segment collections: [`SegmentSet::to_raw`] flattens
//! segments directly, while [`SegmentSet::stitch`] followed by [`ContourSet::to_sorted`] flattens
//! the stitched polylines.
pub mod flat;
pub mod sets;

pub use flat::{RawContours, SortedContours};
pub use sets::{ContourSet, LevelContours, SegmentSet};
