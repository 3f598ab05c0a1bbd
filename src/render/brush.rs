//! Brush stamps used to give lines and rings a thickness.
//!
//! Stamps are emitted as horizontal spans, so a radius-`r` stamp costs
//! `O(r)` sink calls instead of `O(r²)` pixel plots.

use crate::geometry::{Point, Span};

use super::circle::draw_disk;
use super::sink::PixelSink;

/// A stamp shape centered on each rasterized pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    /// Filled `(2r+1)`-sided square, Chebyshev radius `r`.
    Square(i32),
    /// Filled midpoint disk of radius `r`.
    Disk(i32),
}

impl Brush {
    /// Disk brush for a thick line: radius `thickness / 2`.
    #[must_use]
    pub fn for_line(thickness: i32) -> Self {
        Self::Disk((thickness / 2).max(0))
    }

    /// Square brush for a thick ring: radius `(thickness - 1) / 2`.
    #[must_use]
    pub fn for_ring(thickness: i32) -> Self {
        Self::Square(((thickness - 1) / 2).max(0))
    }

    /// Brush radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        match *self {
            Self::Square(r) | Self::Disk(r) => r,
        }
    }

    /// Check whether `offset` (relative to the stamp center) lies within the
    /// brush's own metric.
    ///
    /// Square uses Chebyshev distance. Disk uses Euclidean distance rounded
    /// to the nearest pixel, i.e. `x² + y² <= r² + r`, the region the
    /// midpoint disk stays within. The strict `x² + y² <= r²` bound is too
    /// tight: `Disk(2)` fills `(2, 1)`.
    #[must_use]
    pub fn covers(&self, offset: Point) -> bool {
        match *self {
            Self::Square(r) => offset.chebyshev(Point::ORIGIN) <= i64::from(r.max(0)),
            Self::Disk(r) => {
                let r = i64::from(r.max(0));
                offset.distance_squared(Point::ORIGIN) <= r * r + r
            }
        }
    }

    /// Stamp the brush at `center` into `sink`.
    ///
    /// Rows and columns past the `i32` limits are dropped.
    pub fn stamp<S: PixelSink + ?Sized>(&self, center: Point, sink: &mut S) {
        match *self {
            Self::Square(r) if r <= 0 => sink.plot(center),
            Self::Square(r) => {
                let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(r));
                for y in cy - r..=cy + r {
                    if let Some(span) = Span::from_wide(y, cx - r, cx + r) {
                        sink.span(span);
                    }
                }
            }
            Self::Disk(r) => draw_disk(sink, center, r),
        }
    }
}
