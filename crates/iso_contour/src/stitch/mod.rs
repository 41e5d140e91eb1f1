//! Assembly of unordered segments into polylines and polygons.
//!
//! - [`polyline`]: the [`Polyline`] output type and collinear simplification.
//! - [`stitcher`]: exact-endpoint chaining with selectable [`StitchStrategy`].
pub mod polyline;
pub mod stitcher;

pub use polyline::Polyline;
pub use stitcher::{stitch, stitch_with, StitchStrategy};
