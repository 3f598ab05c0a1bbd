//! Liang-Barsky segment clipping against an axis-aligned rectangle.
//!
//! A segment is parametrized as `P(u) = P0 + u * (P1 - P0)` for `u` in
//! `[0, 1]`. Each rectangle edge contributes a pair `(p, q)`: `p < 0` means
//! the segment enters that edge's half-plane and raises the lower bound,
//! `p > 0` means it leaves and lowers the upper bound. The visible part is
//! whatever survives all four edges.

use crate::geometry::{ClipRect, PointF, Segment};

/// Direction components below this magnitude count as parallel to an edge.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// The visible part of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedSegment {
    /// Visible start, at `t_enter` along the input segment.
    pub start: PointF,
    /// Visible end, at `t_exit` along the input segment.
    pub end: PointF,
    /// Entry parameter in `[0, 1]`.
    pub t_enter: f64,
    /// Exit parameter in `[t_enter, 1]`.
    pub t_exit: f64,
}

impl ClippedSegment {
    /// Round both endpoints to the nearest pixel for rasterization.
    #[must_use]
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.start.round(), self.end.round())
    }

    /// True if the input segment was fully visible.
    #[must_use]
    pub fn is_unclipped(&self) -> bool {
        self.t_enter <= 0.0 && self.t_exit >= 1.0
    }
}

/// Clip `segment` to `rect`, returning the visible part or `None`.
///
/// `rect` is normalized first, so reversed bounds behave like their sorted
/// counterpart. A zero-length segment survives as a single point when it
/// lies inside or on the rectangle.
#[must_use]
pub fn clip(rect: ClipRect, segment: Segment) -> Option<ClippedSegment> {
    let rect = rect.normalized();
    let p0 = PointF::from(segment.a);
    let p1 = PointF::from(segment.b);
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        p0.x - f64::from(rect.xmin),
        f64::from(rect.xmax) - p0.x,
        p0.y - f64::from(rect.ymin),
        f64::from(rect.ymax) - p0.y,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    for (&pk, &qk) in p.iter().zip(&q) {
        if pk.abs() < PARALLEL_EPSILON {
            if qk < 0.0 {
                return None;
            }
            continue;
        }
        let r = qk / pk;
        if pk < 0.0 {
            u1 = u1.max(r);
        } else {
            u2 = u2.min(r);
        }
    }

    if u1 > u2 {
        return None;
    }

    Some(ClippedSegment { start: p0.lerp(p1, u1), end: p0.lerp(p1, u2), t_enter: u1, t_exit: u2 })
}

/// Clip every segment, keeping only the visible parts in input order.
#[must_use]
pub fn clip_all(rect: ClipRect, segments: &[Segment]) -> Vec<ClippedSegment> {
    segments.iter().filter_map(|&s| clip(rect, s)).collect()
}
