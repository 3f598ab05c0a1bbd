//! Geometric primitives in pixel space.
//!
//! All integer coordinates are y-up: `(0, 0)` is the bottom-left pixel of the
//! display surface. The framebuffer performs the flip to row-major storage.

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (y-up).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to another point.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.abs().max(dy.abs())
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Offset this point by `(dx, dy)`, saturating at the `i32` limits.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Offset this point by `(dx, dy)`, or `None` if either coordinate
    /// leaves the `i32` range.
    #[must_use]
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Clamp both coordinates into the display.
    #[must_use]
    pub fn clamped_to(self, bounds: DisplayBounds) -> Self {
        Self::new(self.x.clamp(0, bounds.max_x()), self.y.clamp(0, bounds.max_y()))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A sub-pixel point, produced by the clipper.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel.
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A line segment between two pixels.
///
/// Direction only matters for the clipper's parametrization; drawing and
/// visibility treat `a -> b` and `b -> a` alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Returns the same segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.b, self.a)
    }

    /// True if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// An axis-aligned clip window in inclusive pixel coordinates.
///
/// Constructors and mutators keep `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipRect {
    /// Left edge.
    pub xmin: i32,
    /// Bottom edge.
    pub ymin: i32,
    /// Right edge.
    pub xmax: i32,
    /// Top edge.
    pub ymax: i32,
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::new(200, 150, 700, 450)
    }
}

impl ClipRect {
    /// Create a clip window, normalizing reversed bounds.
    #[must_use]
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self { xmin, ymin, xmax, ymax }.normalized()
    }

    /// Swap edges so that `xmin <= xmax` and `ymin <= ymax`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            xmin: self.xmin.min(self.xmax),
            xmax: self.xmin.max(self.xmax),
            ymin: self.ymin.min(self.ymax),
            ymax: self.ymin.max(self.ymax),
        }
    }

    /// Clamp every edge into the display, then normalize.
    #[must_use]
    pub fn clamped_to(self, bounds: DisplayBounds) -> Self {
        Self {
            xmin: self.xmin.clamp(0, bounds.max_x()),
            xmax: self.xmax.clamp(0, bounds.max_x()),
            ymin: self.ymin.clamp(0, bounds.max_y()),
            ymax: self.ymax.clamp(0, bounds.max_y()),
        }
        .normalized()
    }

    /// Move the whole window by `(dx, dy)`, saturating at the `i32` limits.
    #[must_use]
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            xmin: self.xmin.saturating_add(dx),
            xmax: self.xmax.saturating_add(dx),
            ymin: self.ymin.saturating_add(dy),
            ymax: self.ymax.saturating_add(dy),
        }
    }

    /// Push one edge outward by `amount` pixels.
    #[must_use]
    pub fn grown(self, edge: Edge, amount: i32) -> Self {
        let mut out = self;
        match edge {
            Edge::Left => out.xmin = out.xmin.saturating_sub(amount),
            Edge::Right => out.xmax = out.xmax.saturating_add(amount),
            Edge::Bottom => out.ymin = out.ymin.saturating_sub(amount),
            Edge::Top => out.ymax = out.ymax.saturating_add(amount),
        }
        out.normalized()
    }

    /// Width in pixels (inclusive).
    #[must_use]
    pub fn width(&self) -> i32 {
        self.xmax - self.xmin + 1
    }

    /// Height in pixels (inclusive).
    #[must_use]
    pub fn height(&self) -> i32 {
        self.ymax - self.ymin + 1
    }

    /// Check if a point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: PointF) -> bool {
        point.x >= f64::from(self.xmin)
            && point.x <= f64::from(self.xmax)
            && point.y >= f64::from(self.ymin)
            && point.y <= f64::from(self.ymax)
    }

    /// The four corners, counter-clockwise from bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }
}

/// One side of a [`ClipRect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `xmin`.
    Left,
    /// `xmax`.
    Right,
    /// `ymin`.
    Bottom,
    /// `ymax`.
    Top,
}

/// A circle with a stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels. Values `<= 0` degenerate to the center pixel.
    pub radius: i32,
    /// Stroke thickness in pixels, at least 1.
    pub thickness: i32,
}

impl Circle {
    /// Create a circle; thickness is raised to at least 1.
    #[must_use]
    pub fn new(center: Point, radius: i32, thickness: i32) -> Self {
        Self { center, radius, thickness: thickness.max(1) }
    }
}

/// A horizontal run of pixels `x0..=x1` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Row.
    pub y: i32,
    /// First column (inclusive).
    pub x0: i32,
    /// Last column (inclusive).
    pub x1: i32,
}

impl Span {
    /// Create a span; endpoints are swapped if given in reverse.
    #[must_use]
    pub fn new(y: i32, x0: i32, x1: i32) -> Self {
        Self { y, x0: x0.min(x1), x1: x0.max(x1) }
    }

    /// Span from `i64` coordinates, as produced by brush and disk arithmetic
    /// near the `i32` limits.
    ///
    /// Columns are clamped into `i32`. Returns `None` when the row or the
    /// whole run lies outside it, since no display can show such pixels.
    #[must_use]
    pub fn from_wide(y: i64, x0: i64, x1: i64) -> Option<Self> {
        let y = i32::try_from(y).ok()?;
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        if hi < i64::from(i32::MIN) || lo > i64::from(i32::MAX) {
            return None;
        }
        let clamp = |x: i64| x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Some(Self { y, x0: clamp(lo), x1: clamp(hi) })
    }

    /// Number of pixels in the span.
    #[must_use]
    pub fn len(&self) -> usize {
        (i64::from(self.x1) - i64::from(self.x0) + 1) as usize
    }

    /// Spans always cover at least one pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the pixels of the span, left to right.
    pub fn pixels(self) -> impl Iterator<Item = Point> + Clone {
        (self.x0..=self.x1).map(move |x| Point::new(x, self.y))
    }
}

/// Size of the display surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayBounds {
    width: u32,
    height: u32,
}

impl Default for DisplayBounds {
    fn default() -> Self {
        Self::new(900, 600)
    }
}

impl DisplayBounds {
    /// Create display bounds; each dimension is raised to at least 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: width.clamp(1, i32::MAX as u32), height: height.clamp(1, i32::MAX as u32) }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Largest valid x.
    #[must_use]
    pub const fn max_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Largest valid y.
    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Center pixel (integer division, as a window reshape would compute it).
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Check if a pixel lies on the display.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x() && p.y <= self.max_y()
    }

    /// Row-clip a span to the display, or `None` if nothing is visible.
    #[must_use]
    pub fn clip_span(&self, span: Span) -> Option<Span> {
        if span.y < 0 || span.y > self.max_y() || span.x1 < 0 || span.x0 > self.max_x() {
            return None;
        }
        Some(Span { y: span.y, x0: span.x0.max(0), x1: span.x1.min(self.max_x()) })
    }
}
