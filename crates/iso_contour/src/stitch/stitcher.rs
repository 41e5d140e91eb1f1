//! Endpoint-chaining stitcher.
//!
//! Segments are chained greedily: a chain starts from the lowest-index unconsumed segment and
//! repeatedly absorbs the lowest-index unconsumed segment that shares an endpoint with either end
//! of the chain. Endpoints are compared exactly; the extractor guarantees bit-identical points for
//! edges shared by neighbouring cells.
//!
//! Two strategies find the next segment. [`StitchStrategy::LinearScan`] rescans the remaining
//! segments from the start after every match. [`StitchStrategy::Indexed`] looks candidates up in an
//! index keyed by endpoint coordinates. Both pick the same segment at every step, so their outputs
//! are identical.
use std::collections::{HashMap, VecDeque};

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::polyline::Polyline;
use crate::extract::Segment;

/// Strategy used to locate the next segment of a chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StitchStrategy {
    /// Hash index from endpoint to segment ids. Expected linear time per level.
    #[default]
    Indexed,
    /// Rescan the remaining segments after every match. Quadratic in the segment count.
    LinearScan,
}

/// Chains `segments` into polylines using the default [`StitchStrategy::Indexed`] strategy.
pub fn stitch(segments: &[Segment]) -> Vec<Polyline> {
    stitch_with(segments, StitchStrategy::default())
}

/// Chains `segments` into maximal polylines.
///
/// Every segment ends up in exactly one polyline; polylines appear in the order their first
/// segment appears in `segments`.
pub fn stitch_with(segments: &[Segment], strategy: StitchStrategy) -> Vec<Polyline> {
    let polylines = match strategy {
        StitchStrategy::Indexed => chain_all(segments, &mut EndpointIndex::build(segments)),
        StitchStrategy::LinearScan => chain_all(segments, &mut LinearScan { segments }),
    };
    debug!(
        "Stitched {} segments into {} polylines ({:?}).",
        segments.len(),
        polylines.len(),
        strategy
    );
    polylines
}

/// Finds the lowest-index unconsumed segment touching `head` or `tail`.
trait MatchFinder {
    fn find(&mut self, consumed: &[bool], head: DVec2, tail: DVec2) -> Option<usize>;
}

#[inline]
fn touches(s: &Segment, head: DVec2, tail: DVec2) -> bool {
    s.start == tail || s.end == tail || s.start == head || s.end == head
}

fn chain_all(segments: &[Segment], finder: &mut impl MatchFinder) -> Vec<Polyline> {
    let mut consumed = vec![false; segments.len()];
    let mut polylines = Vec::new();
    let mut next_start = 0;

    loop {
        while next_start < segments.len() && consumed[next_start] {
            next_start += 1;
        }
        let Some(first) = segments.get(next_start) else {
            break;
        };
        consumed[next_start] = true;

        let mut chain = VecDeque::from([first.start, first.end]);
        loop {
            let (head, tail) = match (chain.front(), chain.back()) {
                (Some(&h), Some(&t)) => (h, t),
                _ => break,
            };
            let Some(i) = finder.find(&consumed, head, tail) else {
                break;
            };
            consumed[i] = true;

            let s = &segments[i];
            if s.start == tail {
                chain.push_back(s.end);
            } else if s.end == tail {
                chain.push_back(s.start);
            } else if s.start == head {
                chain.push_front(s.end);
            } else {
                debug_assert!(s.end == head, "matched segment {s:?} touches neither end");
                chain.push_front(s.start);
            }
        }
        polylines.push(Polyline::from(chain));
    }
    polylines
}

struct LinearScan<'s> {
    segments: &'s [Segment],
}

impl MatchFinder for LinearScan<'_> {
    fn find(&mut self, consumed: &[bool], head: DVec2, tail: DVec2) -> Option<usize> {
        self.segments
            .iter()
            .enumerate()
            .find(|(i, s)| !consumed[*i] && touches(s, head, tail))
            .map(|(i, _)| i)
    }
}

/// Hashable exact key for a point. `-0.0` and `0.0` map to the same key, matching `==`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PointKey(u64, u64);

impl From<DVec2> for PointKey {
    #[inline]
    fn from(p: DVec2) -> Self {
        PointKey(canonical_bits(p.x), canonical_bits(p.y))
    }
}

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Endpoint index with ascending segment ids per point.
struct EndpointIndex<'s> {
    segments: &'s [Segment],
    by_point: HashMap<PointKey, Vec<usize>>,
}

impl<'s> EndpointIndex<'s> {
    fn build(segments: &'s [Segment]) -> Self {
        let mut by_point: HashMap<PointKey, Vec<usize>> =
            HashMap::with_capacity(segments.len() + 1);
        for (i, s) in segments.iter().enumerate() {
            by_point.entry(s.start.into()).or_default().push(i);
            if s.end != s.start {
                by_point.entry(s.end.into()).or_default().push(i);
            }
        }
        Self { segments, by_point }
    }

    fn first_unconsumed(&mut self, consumed: &[bool], p: DVec2) -> Option<usize> {
        let ids = self.by_point.get_mut(&PointKey::from(p))?;
        // Consumed ids at the front can never match again.
        let stale = ids.iter().take_while(|&&i| consumed[i]).count();
        ids.drain(..stale);

        let segments = self.segments;
        ids.iter()
            .copied()
            .find(|&i| !consumed[i] && (segments[i].start == p || segments[i].end == p))
    }
}

impl MatchFinder for EndpointIndex<'_> {
    fn find(&mut self, consumed: &[bool], head: DVec2, tail: DVec2) -> Option<usize> {
        let at_tail = self.first_unconsumed(consumed, tail);
        let at_head = self.first_unconsumed(consumed, head);
        match (at_tail, at_head) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
