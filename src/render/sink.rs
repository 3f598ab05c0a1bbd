//! Pixel sinks: where rasterizers send their output.
//!
//! Every rasterizer is generic over [`PixelSink`], so one Bresenham or
//! midpoint core serves thin plotting, brush stamping, collection for tests
//! and painting into a [`Framebuffer`].

use std::collections::BTreeSet;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{DisplayBounds, Point, Span};

use super::brush::Brush;

/// Receiver of rasterized pixels and horizontal spans.
pub trait PixelSink {
    /// Receive one pixel.
    fn plot(&mut self, p: Point);

    /// Receive a horizontal run of pixels.
    ///
    /// The default forwards each pixel to [`PixelSink::plot`]; sinks that can
    /// fill rows in one go should override it.
    fn span(&mut self, span: Span) {
        for p in span.pixels() {
            self.plot(p);
        }
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn plot(&mut self, p: Point) {
        (**self).plot(p);
    }

    fn span(&mut self, span: Span) {
        (**self).span(span);
    }
}

/// Unbounded point collector. Spans are expanded into pixels.
impl PixelSink for Vec<Point> {
    fn plot(&mut self, p: Point) {
        self.push(p);
    }
}

/// Collected rasterizer output: single pixels plus row spans.
///
/// With bounds set, off-display pixels are dropped and spans are row-clipped
/// as they arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    bounds: Option<DisplayBounds>,
    points: Vec<Point>,
    spans: Vec<Span>,
}

impl Fragments {
    /// Collector that discards anything outside `bounds`.
    #[must_use]
    pub fn new(bounds: DisplayBounds) -> Self {
        Self { bounds: Some(bounds), points: Vec::new(), spans: Vec::new() }
    }

    /// Collector that keeps everything.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Pixels received through [`PixelSink::plot`], in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Spans received through [`PixelSink::span`], in order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// True if nothing visible was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.spans.is_empty()
    }

    /// Every pixel, spans expanded, duplicates kept.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied().chain(self.spans.iter().flat_map(|s| s.pixels()))
    }

    /// The distinct set of covered pixels.
    #[must_use]
    pub fn pixel_set(&self) -> BTreeSet<Point> {
        self.pixels().collect()
    }

    /// Replay the collected output into another sink.
    pub fn replay<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for &p in &self.points {
            sink.plot(p);
        }
        for &s in &self.spans {
            sink.span(s);
        }
    }
}

impl PixelSink for Fragments {
    fn plot(&mut self, p: Point) {
        match self.bounds {
            Some(bounds) if !bounds.contains(p) => {}
            _ => self.points.push(p),
        }
    }

    fn span(&mut self, span: Span) {
        let clipped = match self.bounds {
            Some(bounds) => bounds.clip_span(span),
            None => Some(span),
        };
        if let Some(span) = clipped {
            self.spans.push(span);
        }
    }
}

/// Stamps a [`Brush`] into the wrapped sink for every plotted pixel.
#[derive(Debug)]
pub struct BrushStamp<S> {
    inner: S,
    brush: Brush,
}

impl<S: PixelSink> BrushStamp<S> {
    /// Wrap `inner` so that each pixel becomes a brush stamp.
    pub fn new(inner: S, brush: Brush) -> Self {
        Self { inner, brush }
    }

    /// The brush in use.
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PixelSink> PixelSink for BrushStamp<S> {
    fn plot(&mut self, p: Point) {
        self.brush.stamp(p, &mut self.inner);
    }
}

/// Paints pixels into a [`Framebuffer`] in one color, y-up.
#[derive(Debug)]
pub struct Paint<'a> {
    fb: &'a mut Framebuffer,
    color: Rgba,
}

impl<'a> Paint<'a> {
    /// Paint into `fb` with `color`.
    pub fn new(fb: &'a mut Framebuffer, color: Rgba) -> Self {
        Self { fb, color }
    }

    /// Switch color for subsequent output.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
}

impl PixelSink for Paint<'_> {
    fn plot(&mut self, p: Point) {
        self.fb.plot(p, self.color);
    }

    fn span(&mut self, span: Span) {
        self.fb.fill_span(span, self.color);
    }
}
