//! Bresenham line rasterization for all octants.

use std::iter::FusedIterator;

use crate::geometry::{DisplayBounds, Point};

use super::brush::Brush;
use super::sink::{BrushStamp, Fragments, PixelSink};

/// Pixels of a Bresenham line from `p0` to `p1`, both inclusive.
///
/// Yields exactly `max(|dx|, |dy|) + 1` points and ends on `p1`. The
/// iterator is `Clone`, so a line can be walked again without recomputing
/// its setup. Arithmetic runs in `i64`, so any pair of `i32` endpoints is
/// safe.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    sx: i64,
    sy: i64,
    dx: i64,
    dy: i64,
    err: i64,
    steep: bool,
    remaining: usize,
}

impl LinePoints {
    /// Line from `p0` to `p1`.
    #[must_use]
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
        let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
        let sx = if p1.x >= p0.x { 1 } else { -1 };
        let sy = if p1.y >= p0.y { 1 } else { -1 };
        let steep = dy > dx;
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

        Self {
            x: i64::from(p0.x),
            y: i64::from(p0.y),
            sx,
            sy,
            dx,
            dy,
            err: 2 * minor - major,
            steep,
            remaining: major as usize + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Both coordinates stay between the two i32 endpoints.
        let out = Point::new(self.x as i32, self.y as i32);

        if self.steep {
            if self.err >= 0 {
                self.x += self.sx;
                self.err -= 2 * self.dy;
            }
            self.y += self.sy;
            self.err += 2 * self.dx;
        } else {
            if self.err >= 0 {
                self.y += self.sy;
                self.err -= 2 * self.dx;
            }
            self.x += self.sx;
            self.err += 2 * self.dy;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

/// Draw a line into `sink`.
///
/// `thickness <= 1` plots the bare Bresenham pixels. Larger widths stamp a
/// disk of radius `thickness / 2` on every pixel.
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, p0: Point, p1: Point, thickness: i32) {
    if thickness <= 1 {
        for p in LinePoints::new(p0, p1) {
            sink.plot(p);
        }
        return;
    }

    let mut stamp = BrushStamp::new(sink, Brush::for_line(thickness));
    for p in LinePoints::new(p0, p1) {
        stamp.plot(p);
    }
}

/// Rasterize a line into [`Fragments`] clipped to `bounds`.
#[must_use]
pub fn rasterize_line(p0: Point, p1: Point, thickness: i32, bounds: DisplayBounds) -> Fragments {
    let mut frags = Fragments::new(bounds);
    draw_line(&mut frags, p0, p1, thickness);
    frags
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = i32> {
        -500i32..500
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Exactly max(|dx|, |dy|) + 1 points, ending on both endpoints.
        #[test]
        fn prop_count_and_endpoints(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let p0 = Point::new(x0, y0);
            let p1 = Point::new(x1, y1);
            let pts: Vec<_> = LinePoints::new(p0, p1).collect();
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(pts.len(), expected);
            prop_assert_eq!(pts.first().copied(), Some(p0));
            prop_assert_eq!(pts.last().copied(), Some(p1));
        }

        /// Consecutive pixels touch, including diagonally.
        #[test]
        fn prop_eight_connected(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let pts: Vec<_> = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect();
            for pair in pts.windows(2) {
                prop_assert_eq!(pair[0].chebyshev(pair[1]), 1);
            }
        }

        /// Swapping the endpoints keeps the pixel count.
        #[test]
        fn prop_reverse_same_count(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let fwd = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).count();
            let rev = LinePoints::new(Point::new(x1, y1), Point::new(x0, y0)).count();
            prop_assert_eq!(fwd, rev);
        }

        /// Bounded output never leaves the display.
        #[test]
        fn prop_bounded(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(), thickness in 1i32..20,
        ) {
            let bounds = DisplayBounds::new(200, 150);
            let frags = rasterize_line(Point::new(x0, y0), Point::new(x1, y1), thickness, bounds);
            prop_assert!(frags.pixels().all(|p| bounds.contains(p)));
        }
    }
}
