//! Marching-squares case table.
//!
//! Corners are numbered counter-clockwise from the lower-left node of a cell:
//!
//! ```text
//!   3 ---- Top ---- 2
//!   |               |
//!  Left           Right
//!   |               |
//!   0 --- Bottom -- 1
//! ```
//!
//! Bit `i` of a corner mask is set when corner `i` lies strictly above the level. The table maps
//! each of the 16 masks to the pairs of crossed edges that become segments.

/// One of the four edges of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Bottom,
    Right,
    Top,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    /// Corner indices of the edge, ordered by increasing grid index.
    ///
    /// Neighbouring cells share an edge with the same ordering, so both interpolate it identically.
    #[inline]
    pub const fn corners(self) -> (usize, usize) {
        match self {
            Edge::Bottom => (0, 1),
            Edge::Right => (1, 2),
            Edge::Top => (3, 2),
            Edge::Left => (0, 3),
        }
    }

    /// Returns `true` for edges running along the x axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Bottom | Edge::Top)
    }

    /// Returns `true` if exactly one corner of this edge is set in `mask`.
    #[inline]
    pub const fn is_crossed(self, mask: u8) -> bool {
        let (a, b) = self.corners();
        ((mask >> a) & 1) != ((mask >> b) & 1)
    }
}

/// Two crossed edges joined by one segment.
pub type EdgePair = (Edge, Edge);

/// Table entry for one corner mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellCase {
    /// All corners on the same side of the level.
    Empty,
    /// One segment.
    Single(EdgePair),
    /// Diagonal corners on the same side: two segments whose pairing depends on the cell centre.
    Saddle {
        /// Pairing when the centre lies above the level: the two above corners stay connected.
        joined: [EdgePair; 2],
        /// Pairing when the centre lies at or below the level: each above corner is cut off.
        split: [EdgePair; 2],
    },
}

impl CellCase {
    /// Edge pairs to emit, given whether the cell centre lies above the level.
    #[inline]
    pub fn pairs(&self, centre_above: bool) -> &[EdgePair] {
        match self {
            CellCase::Empty => &[],
            CellCase::Single(pair) => std::slice::from_ref(pair),
            CellCase::Saddle { joined, split } => {
                if centre_above {
                    joined
                } else {
                    split
                }
            }
        }
    }

    pub fn is_saddle(&self) -> bool {
        matches!(self, CellCase::Saddle { .. })
    }
}

use Edge::{Bottom, Left, Right, Top};

static CASES: [CellCase; 16] = [
    CellCase::Empty,
    CellCase::Single((Left, Bottom)),
    CellCase::Single((Bottom, Right)),
    CellCase::Single((Left, Right)),
    CellCase::Single((Right, Top)),
    CellCase::Saddle {
        joined: [(Bottom, Right), (Top, Left)],
        split: [(Left, Bottom), (Right, Top)],
    },
    CellCase::Single((Bottom, Top)),
    CellCase::Single((Left, Top)),
    CellCase::Single((Top, Left)),
    CellCase::Single((Bottom, Top)),
    CellCase::Saddle {
        joined: [(Left, Bottom), (Right, Top)],
        split: [(Bottom, Right), (Top, Left)],
    },
    CellCase::Single((Right, Top)),
    CellCase::Single((Left, Right)),
    CellCase::Single((Bottom, Right)),
    CellCase::Single((Left, Bottom)),
    CellCase::Empty,
];

/// Builds the 4-bit corner mask; a corner counts as above only when strictly greater than `level`.
#[inline]
pub fn corner_mask(z: &[f64; 4], level: f64) -> u8 {
    z.iter()
        .enumerate()
        .fold(0u8, |mask, (i, &v)| mask | (u8::from(v > level) << i))
}

/// Looks up the case for a corner mask.
///
/// # Panics
///
/// Panics if `mask` has bits set above bit 3.
#[inline]
pub fn lookup(mask: u8) -> &'static CellCase {
    assert!(mask < 16, "corner mask {mask:#06b} out of range");
    &CASES[mask as usize]
}
