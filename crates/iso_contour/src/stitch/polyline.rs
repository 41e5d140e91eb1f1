//! Polylines produced by stitching segments together.
use std::collections::VecDeque;

use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered chain of points. A polyline whose first and last points coincide is a closed polygon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    pub points: Vec<DVec2>,
}

impl Polyline {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Returns `true` if the first point equals the last one exactly.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Consecutive point pairs, in chain order.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Removes interior vertices lying within `tolerance` of the line through their neighbours.
    ///
    /// The first and last points are always kept, so closed polylines stay closed. A tolerance of
    /// `0.0` removes only exactly collinear vertices.
    pub fn simplify_collinear(&self, tolerance: f64) -> Polyline {
        if self.points.len() < 3 {
            return self.clone();
        }

        let mut kept = Vec::with_capacity(self.points.len());
        kept.push(self.points[0]);
        for w in self.points.windows(3) {
            let anchor = *kept.last().unwrap_or(&w[0]);
            if distance_to_line(w[1], anchor, w[2]) > tolerance {
                kept.push(w[1]);
            }
        }
        kept.push(self.points[self.points.len() - 1]);
        Polyline::new(kept)
    }

    /// Points converted to `mint` vectors for interop with other math libraries.
    pub fn to_mint(&self) -> Vec<Vector2<f64>> {
        self.points.iter().copied().map(Vector2::from).collect()
    }
}

impl From<VecDeque<DVec2>> for Polyline {
    fn from(points: VecDeque<DVec2>) -> Self {
        Self::new(points.into())
    }
}

impl From<Vec<DVec2>> for Polyline {
    fn from(points: Vec<DVec2>) -> Self {
        Self::new(points)
    }
}

fn distance_to_line(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let dir = b - a;
    let len = dir.length();
    if len == 0.0 {
        return p.distance(a);
    }
    dir.perp_dot(p - a).abs() / len
}
