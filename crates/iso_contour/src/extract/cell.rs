//! Single-cell marching-squares extraction.
//!
//! [`extract_cell`] classifies one cell against a level and emits up to two [`Segment`]s with
//! endpoints interpolated along the crossed edges in data-space coordinates.
use glam::DVec2;

use super::case_table::{self, corner_mask, Edge};
use super::Segment;
use crate::field::GridField;

/// Corner samples and coordinates of one grid cell.
///
/// Corner order follows [`case_table`]: lower-left, lower-right, upper-right, upper-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub z: [f64; 4],
    /// Column coordinates `[x(ix), x(ix + 1)]`.
    pub x: [f64; 2],
    /// Row coordinates `[y(iy), y(iy + 1)]`.
    pub y: [f64; 2],
}

impl Cell {
    pub fn new(z: [f64; 4], x: [f64; 2], y: [f64; 2]) -> Self {
        Self { z, x, y }
    }

    /// Cell whose lower-left node is `(ix, iy)`. Both `ix + 1` and `iy + 1` must be in range.
    #[inline]
    pub fn from_field(field: &GridField<'_>, ix: usize, iy: usize) -> Self {
        Self {
            z: [
                field.value(ix, iy),
                field.value(ix + 1, iy),
                field.value(ix + 1, iy + 1),
                field.value(ix, iy + 1),
            ],
            x: [field.x(ix), field.x(ix + 1)],
            y: [field.y(iy), field.y(iy + 1)],
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.z.iter().all(|v| v.is_finite())
    }

    /// Arithmetic mean of the corner samples, used to resolve saddles.
    #[inline]
    pub fn mean(&self) -> f64 {
        // Scaled before summing so four values near f64::MAX do not overflow.
        self.z.iter().map(|v| 0.25 * v).sum()
    }

    /// Data-space position of corner `i` in [`case_table`] order.
    #[inline]
    pub fn corner(&self, i: usize) -> DVec2 {
        let [x0, x1] = self.x;
        let [y0, y1] = self.y;
        match i {
            0 => DVec2::new(x0, y0),
            1 => DVec2::new(x1, y0),
            2 => DVec2::new(x1, y1),
            _ => DVec2::new(x0, y1),
        }
    }

    /// Point where `level` crosses `edge`.
    ///
    /// A corner sample equal to `level` yields that corner's exact coordinates, so a node on the
    /// level has one position in every cell that touches it.
    ///
    /// # Panics
    ///
    /// Panics if the edge is not crossed, i.e. both corners lie on the same side of `level`.
    pub fn crossing(&self, edge: Edge, level: f64) -> DVec2 {
        let (a, b) = edge.corners();
        let (za, zb) = (self.z[a], self.z[b]);
        assert!(
            (za > level) != (zb > level),
            "edge {edge:?} is not crossed at level {level} (corners {za}, {zb})"
        );

        if level == za {
            return self.corner(a);
        }
        if level == zb {
            return self.corner(b);
        }

        let t = (level - za) / (zb - za);
        let [x0, x1] = self.x;
        let [y0, y1] = self.y;
        match edge {
            Edge::Bottom => DVec2::new(lerp(x0, x1, t), y0),
            Edge::Top => DVec2::new(lerp(x0, x1, t), y1),
            Edge::Left => DVec2::new(x0, lerp(y0, y1, t)),
            Edge::Right => DVec2::new(x1, lerp(y0, y1, t)),
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Up to two segments produced by one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSegments {
    segments: [Segment; 2],
    len: usize,
}

impl CellSegments {
    fn push(&mut self, segment: Segment) {
        self.segments[self.len] = segment;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Extracts the iso-line segments of `cell` at `level`.
///
/// Cells touching a non-finite sample produce nothing. Segments that collapse to a single point
/// (both crossings land on a corner equal to `level`) are dropped.
pub fn extract_cell(cell: &Cell, level: f64) -> CellSegments {
    let mut out = CellSegments::default();
    if !cell.is_finite() {
        return out;
    }

    let case = case_table::lookup(corner_mask(&cell.z, level));
    let centre_above = case.is_saddle() && cell.mean() > level;
    for &(from, to) in case.pairs(centre_above) {
        let start = cell.crossing(from, level);
        let end = cell.crossing(to, level);
        if start != end {
            out.push(Segment::new(start, end, level));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 2] = [0.0, 4.0];
    const Y: [f64; 2] = [10.0, 12.0];

    fn cell_from_mask(mask: u8, above: f64, below: f64) -> Cell {
        let mut z = [below; 4];
        for (i, v) in z.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *v = above;
            }
        }
        Cell::new(z, X, Y)
    }

    fn midpoint(edge: Edge) -> DVec2 {
        match edge {
            Edge::Bottom => DVec2::new(2.0, 10.0),
            Edge::Right => DVec2::new(4.0, 11.0),
            Edge::Top => DVec2::new(2.0, 12.0),
            Edge::Left => DVec2::new(0.0, 11.0),
        }
    }

    fn expected_count(mask: u8) -> usize {
        match mask {
            0 | 15 => 0,
            5 | 10 => 2,
            _ => 1,
        }
    }

    #[test]
    fn all_sixteen_configurations_emit_documented_segments() {
        for mask in 0u8..16 {
            let cell = cell_from_mask(mask, 2.0, 0.0);
            let out = extract_cell(&cell, 1.0);
            assert_eq!(out.len(), expected_count(mask), "mask {mask:#06b}");

            let crossed: Vec<DVec2> = Edge::ALL
                .iter()
                .filter(|e| e.is_crossed(mask))
                .map(|&e| midpoint(e))
                .collect();
            for seg in out.as_slice() {
                assert_eq!(seg.level, 1.0);
                assert!(crossed.contains(&seg.start), "mask {mask:#06b}: {seg:?}");
                assert!(crossed.contains(&seg.end), "mask {mask:#06b}: {seg:?}");
                assert_ne!(seg.start, seg.end);
            }
        }
    }

    #[test]
    fn uniform_cell_has_no_segments() {
        let cell = Cell::new([0.0; 4], [0.0, 1.0], [0.0, 1.0]);
        assert!(extract_cell(&cell, 0.5).is_empty());
    }

    #[test]
    fn vertical_step_connects_edge_midpoints() {
        // Rows [[0, 2], [0, 2]]: the right column is above level 1.
        let cell = Cell::new([0.0, 2.0, 2.0, 0.0], [0.0, 1.0], [0.0, 1.0]);
        let out = extract_cell(&cell, 1.0);
        assert_eq!(out.len(), 1);

        let seg = out.as_slice()[0];
        let mut ends = [seg.start, seg.end];
        ends.sort_by(|a, b| a.y.total_cmp(&b.y));
        assert_eq!(ends, [DVec2::new(0.5, 0.0), DVec2::new(0.5, 1.0)]);
    }

    #[test]
    fn interpolation_uses_axis_coordinates() {
        // Bottom edge from 0 to 4 in x, values 1 -> 5, level 2: t = 0.25.
        let cell = Cell::new([1.0, 5.0, 5.0, 1.0], X, Y);
        assert_eq!(cell.crossing(Edge::Bottom, 2.0), DVec2::new(1.0, 10.0));
        assert_eq!(cell.crossing(Edge::Top, 2.0), DVec2::new(1.0, 12.0));

        // Left edge from 10 to 12 in y, values 1 -> 5, level 4: t = 0.75.
        let cell = Cell::new([1.0, 1.0, 5.0, 5.0], X, Y);
        assert_eq!(cell.crossing(Edge::Left, 4.0), DVec2::new(0.0, 11.5));
    }

    #[test]
    fn saddle_resolution_follows_cell_mean() {
        // Corners 0 and 2 above. Mean 1.5 > 1: above corners joined, corners 1 and 3 cut off.
        let high = extract_cell(&cell_from_mask(5, 3.0, 0.0), 1.0);
        // Mean 0.75 <= 1: corners 0 and 2 cut off.
        let low = extract_cell(&cell_from_mask(5, 1.5, 0.0), 1.0);
        assert_eq!(high.len(), 2);
        assert_eq!(low.len(), 2);

        let touches = |seg: &Segment, a: Edge, b: Edge, cell: &Cell| {
            let pa = cell.crossing(a, 1.0);
            let pb = cell.crossing(b, 1.0);
            (seg.start == pa && seg.end == pb) || (seg.start == pb && seg.end == pa)
        };

        let hc = cell_from_mask(5, 3.0, 0.0);
        assert!(high
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Bottom, Edge::Right, &hc)));
        assert!(high
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Top, Edge::Left, &hc)));

        let lc = cell_from_mask(5, 1.5, 0.0);
        assert!(low
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Left, Edge::Bottom, &lc)));
        assert!(low
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Right, Edge::Top, &lc)));

        // Mean exactly 1 is not above the level: split like the low case.
        let tc = cell_from_mask(5, 2.0, 0.0);
        assert_eq!(tc.mean(), 1.0);
        let tie = extract_cell(&tc, 1.0);
        assert_eq!(tie.len(), 2);
        assert!(tie
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Left, Edge::Bottom, &tc)));
        assert!(tie
            .as_slice()
            .iter()
            .any(|s| touches(s, Edge::Right, Edge::Top, &tc)));
    }

    #[test]
    fn non_finite_corner_suppresses_cell() {
        let nan = Cell::new([0.0, 2.0, f64::NAN, 0.0], X, Y);
        let inf = Cell::new([0.0, f64::INFINITY, 2.0, 0.0], X, Y);
        assert!(extract_cell(&nan, 1.0).is_empty());
        assert!(extract_cell(&inf, 1.0).is_empty());
    }

    #[test]
    fn corner_on_level_drops_zero_length_segment() {
        let cell = Cell::new([1.0, 2.0, 2.0, 2.0], X, Y);
        assert!(extract_cell(&cell, 1.0).is_empty());
    }

    #[test]
    fn corner_on_level_is_exact_on_mixed_sign_axes() {
        // x0 + (x1 - x0) is not bit-equal to x1 for these axes.
        let axis = [-6.729376757744716, 2.1822054801854414];
        let cell = Cell::new([2.0, 2.0, 1.0, 2.0], axis, axis);
        let node = DVec2::new(axis[1], axis[1]);

        assert_eq!(cell.crossing(Edge::Right, 1.0), node);
        assert_eq!(cell.crossing(Edge::Top, 1.0), node);
        assert!(extract_cell(&cell, 1.0).is_empty());

        // Upper-left corner on the level: the segment runs from the bottom edge to that node.
        let cell = Cell::new([2.0, 0.0, 0.0, 1.0], axis, axis);
        let out = extract_cell(&cell, 1.0);
        assert_eq!(out.len(), 1);
        let seg = out.as_slice()[0];
        assert!(seg.endpoints().contains(&DVec2::new(axis[0], axis[1])));
        assert!(seg.length() > 1.0);
    }

    #[test]
    fn non_finite_level_yields_nothing() {
        let cell = Cell::new([0.0, 2.0, 2.0, 0.0], X, Y);
        assert!(extract_cell(&cell, f64::NAN).is_empty());
        assert!(extract_cell(&cell, f64::INFINITY).is_empty());
        assert!(extract_cell(&cell, f64::NEG_INFINITY).is_empty());
    }

    #[test]
    #[should_panic(expected = "not crossed")]
    fn crossing_on_uncrossed_edge_panics() {
        let cell = Cell::new([0.0; 4], X, Y);
        let _ = cell.crossing(Edge::Bottom, 1.0);
    }

    #[test]
    fn from_field_reads_counter_clockwise_corners() {
        let field = GridField::from_vecs(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 1.0, 3.0],
            vec![0.0, 2.0],
        )
        .expect("valid grid");
        let cell = Cell::from_field(&field, 1, 0);
        assert_eq!(cell.z, [2.0, 3.0, 6.0, 5.0]);
        assert_eq!(cell.x, [1.0, 3.0]);
        assert_eq!(cell.y, [0.0, 2.0]);
    }
}
