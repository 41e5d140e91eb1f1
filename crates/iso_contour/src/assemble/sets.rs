//! Structured per-level results.
//!
//! [`SegmentSet`] holds the unordered segments of every level; [`ContourSet`] holds the stitched
//! polylines. Both keep the caller's level order, duplicates included.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::flat::{RawContours, SortedContours};
use crate::extract::LevelSegments;
use crate::stitch::{stitch_with, Polyline, StitchStrategy};

/// Raw segments for every requested level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentSet {
    pub levels: Vec<LevelSegments>,
}

impl SegmentSet {
    pub fn new(levels: Vec<LevelSegments>) -> Self {
        Self { levels }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of segments over all levels.
    pub fn segment_count(&self) -> usize {
        self.levels.iter().map(LevelSegments::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSegments> {
        self.levels.iter()
    }

    /// Stitches every level into polylines.
    pub fn stitch(&self, strategy: StitchStrategy) -> ContourSet {
        ContourSet::new(
            self.levels
                .iter()
                .map(|l| LevelContours::new(l.level, stitch_with(&l.segments, strategy)))
                .collect(),
        )
    }

    /// Flattens into the raw-mode buffers.
    pub fn to_raw(&self) -> RawContours {
        let total = self.segment_count();
        let mut raw = RawContours {
            x: Vec::with_capacity(2 * total),
            y: Vec::with_capacity(2 * total),
            segment_counts: Vec::with_capacity(self.levels.len()),
        };
        for level in &self.levels {
            raw.segment_counts.push(level.segments.len());
            for s in &level.segments {
                raw.x.extend([s.start.x, s.end.x]);
                raw.y.extend([s.start.y, s.end.y]);
            }
        }
        raw
    }
}

/// Stitched polylines for one level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelContours {
    pub level: f64,
    pub polylines: Vec<Polyline>,
}

impl LevelContours {
    pub fn new(level: f64, polylines: Vec<Polyline>) -> Self {
        Self { level, polylines }
    }

    pub fn closed_count(&self) -> usize {
        self.polylines.iter().filter(|p| p.is_closed()).count()
    }
}

/// Stitched polylines for every requested level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContourSet {
    pub levels: Vec<LevelContours>,
}

impl ContourSet {
    pub fn new(levels: Vec<LevelContours>) -> Self {
        Self { levels }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of polylines over all levels.
    pub fn polyline_count(&self) -> usize {
        self.levels.iter().map(|l| l.polylines.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelContours> {
        self.levels.iter()
    }

    /// Applies [`Polyline::simplify_collinear`] to every polyline.
    pub fn simplify_collinear(&self, tolerance: f64) -> ContourSet {
        ContourSet::new(
            self.levels
                .iter()
                .map(|l| {
                    LevelContours::new(
                        l.level,
                        l.polylines
                            .iter()
                            .map(|p| p.simplify_collinear(tolerance))
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    /// Flattens into the sorted-mode buffers.
    pub fn to_sorted(&self) -> SortedContours {
        let total: usize = self
            .levels
            .iter()
            .flat_map(|l| &l.polylines)
            .map(Polyline::len)
            .sum();
        let mut sorted = SortedContours {
            x: Vec::with_capacity(total),
            y: Vec::with_capacity(total),
            point_counts: Vec::with_capacity(self.polyline_count()),
            polyline_counts: Vec::with_capacity(self.levels.len()),
        };
        for level in &self.levels {
            sorted.polyline_counts.push(level.polylines.len());
            for line in &level.polylines {
                sorted.point_counts.push(line.len());
                sorted.x.extend(line.points.iter().map(|p| p.x));
                sorted.y.extend(line.points.iter().map(|p| p.y));
            }
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::extract::Segment;

    fn seg(a: (f64, f64), b: (f64, f64), level: f64) -> Segment {
        Segment::new(DVec2::new(a.0, a.1), DVec2::new(b.0, b.1), level)
    }

    fn sample_set() -> SegmentSet {
        SegmentSet::new(vec![
            LevelSegments::new(
                1.0,
                vec![
                    seg((0.0, 0.0), (1.0, 0.0), 1.0),
                    seg((1.0, 0.0), (1.0, 1.0), 1.0),
                ],
            ),
            LevelSegments::new(2.0, Vec::new()),
            LevelSegments::new(3.0, vec![seg((5.0, 5.0), (6.0, 6.0), 3.0)]),
        ])
    }

    #[test]
    fn raw_pairs_endpoints_in_level_order() {
        let raw = sample_set().to_raw();
        assert_eq!(raw.segment_counts, vec![2, 0, 1]);
        assert_eq!(raw.x, vec![0.0, 1.0, 1.0, 1.0, 5.0, 6.0]);
        assert_eq!(raw.y, vec![0.0, 0.0, 0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn sorted_counts_recover_level_boundaries() {
        let set = sample_set();
        let contours = set.stitch(StitchStrategy::Indexed);
        assert_eq!(contours.len(), 3);
        assert_eq!(contours.polyline_count(), 2);

        let sorted = contours.to_sorted();
        assert_eq!(sorted.polyline_counts, vec![1, 0, 1]);
        assert_eq!(sorted.point_counts, vec![3, 2]);
        assert_eq!(sorted.x, vec![0.0, 1.0, 1.0, 5.0, 6.0]);
        assert_eq!(sorted.y, vec![0.0, 0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn empty_sets_flatten_to_empty_buffers() {
        let set = SegmentSet::default();
        let raw = set.to_raw();
        let sorted = set.stitch(StitchStrategy::default()).to_sorted();
        assert!(raw.x.is_empty() && raw.y.is_empty() && raw.segment_counts.is_empty());
        assert!(sorted.is_empty());
        assert!(sorted.point_counts.is_empty() && sorted.polyline_counts.is_empty());
    }

    #[test]
    fn closed_count_reports_polygons() {
        let set = SegmentSet::new(vec![LevelSegments::new(
            0.5,
            vec![
                seg((0.0, 0.0), (1.0, 0.0), 0.5),
                seg((1.0, 0.0), (0.0, 1.0), 0.5),
                seg((0.0, 1.0), (0.0, 0.0), 0.5),
                seg((3.0, 3.0), (4.0, 4.0), 0.5),
            ],
        )]);
        let contours = set.stitch(StitchStrategy::LinearScan);
        assert_eq!(contours.levels[0].closed_count(), 1);
        assert_eq!(contours.polyline_count(), 2);
    }
}
