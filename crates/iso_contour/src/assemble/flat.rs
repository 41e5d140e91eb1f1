//! Flat coordinate buffers for the two output modes.
//!
//! Both modes use the same axis order: `x` holds coordinates along the grid's x axis (the fastest
//! varying sample index) and `y` holds coordinates along its y axis.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::stitch::Polyline;

/// Raw mode: every segment as a pair of consecutive points.
///
/// Segment `k` occupies indices `2k` and `2k + 1` of `x` and `y`. Segments are concatenated in
/// level order and `segment_counts[i]` tells how many belong to level `i`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawContours {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub segment_counts: Vec<usize>,
}

impl RawContours {
    /// Total number of segments.
    pub fn segment_count(&self) -> usize {
        self.x.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Splits the buffers back into per-level segment endpoint pairs.
    pub fn segments(&self) -> Vec<Vec<[DVec2; 2]>> {
        let mut offset = 0;
        self.segment_counts
            .iter()
            .map(|&count| {
                let level: Vec<[DVec2; 2]> = (offset..offset + count)
                    .map(|k| [self.point(2 * k), self.point(2 * k + 1)])
                    .collect();
                offset += count;
                level
            })
            .collect()
    }

    #[inline]
    fn point(&self, i: usize) -> DVec2 {
        DVec2::new(self.x[i], self.y[i])
    }
}

/// Sorted mode: stitched polylines with contiguous points.
///
/// `point_counts[j]` is the number of points of polyline `j`; `polyline_counts[i]` is the number
/// of polylines belonging to level `i`. Summing counts recovers level boundaries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortedContours {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub point_counts: Vec<usize>,
    pub polyline_counts: Vec<usize>,
}

impl SortedContours {
    /// Total number of polylines.
    pub fn polyline_count(&self) -> usize {
        self.point_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Splits the buffers back into per-level polylines.
    pub fn polylines(&self) -> Vec<Vec<Polyline>> {
        let mut point_offset = 0;
        let mut counts = self.point_counts.iter();
        self.polyline_counts
            .iter()
            .map(|&n| -> Vec<Polyline> {
                counts
                    .by_ref()
                    .take(n)
                    .map(|&len| {
                        let points = (point_offset..point_offset + len)
                            .map(|i| DVec2::new(self.x[i], self.y[i]))
                            .collect();
                        point_offset += len;
                        Polyline::new(points)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_segments_split_by_level() {
        let raw = RawContours {
            x: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            y: vec![0.5, 0.5, 1.5, 1.5, 2.5, 2.5],
            segment_counts: vec![1, 0, 2],
        };
        let levels = raw.segments();
        assert_eq!(raw.segment_count(), 3);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0], vec![[DVec2::new(0.0, 0.5), DVec2::new(1.0, 0.5)]]);
        assert!(levels[1].is_empty());
        assert_eq!(levels[2][1], [DVec2::new(4.0, 2.5), DVec2::new(5.0, 2.5)]);
    }

    #[test]
    fn sorted_polylines_split_by_level() {
        let sorted = SortedContours {
            x: vec![0.0, 1.0, 2.0, 7.0, 8.0],
            y: vec![0.0, 0.0, 0.0, 1.0, 1.0],
            point_counts: vec![3, 2],
            polyline_counts: vec![0, 2],
        };
        let levels = sorted.polylines();
        assert_eq!(sorted.polyline_count(), 2);
        assert!(levels[0].is_empty());
        assert_eq!(levels[1].len(), 2);
        assert_eq!(levels[1][0].len(), 3);
        assert_eq!(levels[1][1].points, vec![DVec2::new(7.0, 1.0), DVec2::new(8.0, 1.0)]);
    }
}
