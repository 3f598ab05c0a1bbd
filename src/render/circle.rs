//! Midpoint circle rasterization.
//!
//! One integer octant generator ([`Octants`]) drives three outputs:
//!
//! - [`CirclePoints`]: the thin 8-way symmetric outline
//! - [`draw_ring`]: the outline stamped with a square brush (hollow ring)
//! - [`draw_disk`]: a solid disk filled with four spans per octant step
//!
//! A thick ring and a solid disk of the same radius cover different pixels,
//! so they stay separate operations.

use std::iter::FusedIterator;

use crate::geometry::{Circle, DisplayBounds, Point, Span};

use super::brush::Brush;
use super::sink::{Fragments, PixelSink};

/// First-octant offsets `(x, y)` with `0 <= x <= y` of a midpoint circle.
///
/// Starts at `(0, r)` with decision value `d = 1 - r`. A radius `<= 0`
/// yields only `(0, 0)`.
#[derive(Debug, Clone)]
pub struct Octants {
    x: i64,
    y: i64,
    d: i64,
}

impl Octants {
    /// Octant generator for `radius`.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        let r = i64::from(radius.max(0));
        Self { x: 0, y: r, d: 1 - r }
    }
}

impl Iterator for Octants {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x > self.y {
            return None;
        }
        // 0 <= x <= y <= radius, so both fit in i32.
        let out = Point::new(self.x as i32, self.y as i32);
        if self.d < 0 {
            self.d += 2 * self.x + 3;
        } else {
            self.d += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;
        Some(out)
    }
}

impl FusedIterator for Octants {}

/// The distinct 8-way reflections of an octant offset, in a fixed order.
fn reflections(offset: Point) -> ([Point; 8], usize) {
    let Point { x, y } = offset;
    let all = [
        Point::new(x, y),
        Point::new(-x, y),
        Point::new(x, -y),
        Point::new(-x, -y),
        Point::new(y, x),
        Point::new(-y, x),
        Point::new(y, -x),
        Point::new(-y, -x),
    ];
    let mut unique = [Point::ORIGIN; 8];
    let mut len = 0;
    for p in all {
        if !unique[..len].contains(&p) {
            unique[len] = p;
            len += 1;
        }
    }
    (unique, len)
}

/// Thin outline points of a circle, each pixel exactly once.
///
/// Lazy and restartable (`Clone`). Radius `<= 0` yields the center only.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    center: Point,
    octants: Octants,
    pending: [Point; 8],
    len: usize,
    idx: usize,
}

impl CirclePoints {
    /// Outline of the circle at `center` with `radius`.
    #[must_use]
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, octants: Octants::new(radius), pending: [Point::ORIGIN; 8], len: 0, idx: 0 }
    }
}

impl Iterator for CirclePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if self.idx == self.len {
                let offset = self.octants.next()?;
                (self.pending, self.len) = reflections(offset);
                self.idx = 0;
            }
            let p = self.pending[self.idx];
            self.idx += 1;
            // Reflections past the i32 limits cannot be on any display.
            if let Some(p) = self.center.checked_offset(p.x, p.y) {
                return Some(p);
            }
        }
    }
}

impl FusedIterator for CirclePoints {}

/// Plot the thin outline of a circle.
pub fn draw_circle_outline<S: PixelSink + ?Sized>(sink: &mut S, center: Point, radius: i32) {
    for p in CirclePoints::new(center, radius) {
        sink.plot(p);
    }
}

/// Draw a hollow ring: the outline with a square brush of radius
/// `(thickness - 1) / 2` stamped on every outline pixel.
pub fn draw_ring<S: PixelSink + ?Sized>(sink: &mut S, circle: Circle) {
    let brush = Brush::for_ring(circle.thickness);
    for p in CirclePoints::new(circle.center, circle.radius) {
        brush.stamp(p, sink);
    }
}

/// Fill a solid disk with horizontal spans.
///
/// Radius `<= 0` plots the center pixel only.
pub fn draw_disk<S: PixelSink + ?Sized>(sink: &mut S, center: Point, radius: i32) {
    if radius <= 0 {
        sink.plot(center);
        return;
    }
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    for Point { x, y } in Octants::new(radius) {
        let (x, y) = (i64::from(x), i64::from(y));
        let rows = [(cy + y, x), (cy - y, x), (cy + x, y), (cy - x, y)];
        for (row, half) in rows {
            if let Some(span) = Span::from_wide(row, cx - half, cx + half) {
                sink.span(span);
            }
        }
    }
}

/// How [`rasterize_circle`] realizes thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleStyle {
    /// Hollow ring, square brush per outline pixel.
    #[default]
    Ring,
    /// Solid disk filled by spans. Ignores thickness.
    Disk,
}

/// Rasterize a circle into bounded [`Fragments`].
#[must_use]
pub fn rasterize_circle(
    center: Point,
    radius: i32,
    thickness: i32,
    style: CircleStyle,
    bounds: DisplayBounds,
) -> Fragments {
    let mut frags = Fragments::new(bounds);
    match style {
        CircleStyle::Ring if thickness <= 1 => draw_circle_outline(&mut frags, center, radius),
        CircleStyle::Ring => draw_ring(&mut frags, Circle::new(center, radius, thickness)),
        CircleStyle::Disk => draw_disk(&mut frags, center, radius),
    }
    frags
}
