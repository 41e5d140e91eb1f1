//! Grid field input for contour extraction.
//!
//! A [`GridField`] pairs a row-major sample buffer with its x and y coordinate vectors. It is
//! validated once at construction and read-only afterwards.
pub mod grid;

pub use grid::GridField;
