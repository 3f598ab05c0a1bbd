//! Core framebuffer for pixel rendering.
//!
//! An aligned RGBA pixel buffer stored top row first. Scene coordinates are
//! y-up, so the y-up entry points ([`Framebuffer::plot`],
//! [`Framebuffer::fill_span`]) flip rows on the way in.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{DisplayBounds, Point, Span};
use trueno::{Backend, Vector};

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// Row-aligned RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, top row first.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_lab::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(900, 600).unwrap();
    /// assert_eq!(fb.width(), 900);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self { width, height, pixels, stride })
    }

    /// Create a framebuffer covering a display.
    ///
    /// # Errors
    ///
    /// Never fails in practice since [`DisplayBounds`] is at least 1x1.
    pub fn for_bounds(bounds: DisplayBounds) -> Result<Self> {
        Self::new(bounds.width(), bounds.height())
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Display bounds matching this buffer.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        DisplayBounds::new(self.width, self.height)
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get a storage row (top row is 0) as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height as usize {
            let row_start = y * self.stride;
            let row = &mut self.pixels[row_start..row_start + (self.width as usize) * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Fill a rectangular region given in storage coordinates.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a storage coordinate (top row is 0).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a storage coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Read a pixel in y-up scene coordinates.
    #[must_use]
    pub fn at(&self, p: Point) -> Option<Rgba> {
        let (x, y) = self.to_storage(p)?;
        self.get_pixel(x, y)
    }

    /// Plot a pixel in y-up scene coordinates. Off-screen pixels are dropped.
    pub fn plot(&mut self, p: Point, color: Rgba) {
        if let Some((x, y)) = self.to_storage(p) {
            self.set_pixel(x, y, color);
        }
    }

    /// Fill a horizontal span in y-up scene coordinates, row-clipped.
    pub fn fill_span(&mut self, span: Span, color: Rgba) {
        let Some(span) = self.bounds().clip_span(span) else {
            return;
        };
        let row = self.height - 1 - span.y as u32;
        self.fill_rect(span.x0 as u32, row, span.len() as u32, 1, color);
    }

    /// Count pixels that differ from `background`.
    #[must_use]
    pub fn coverage(&self, background: Rgba) -> usize {
        let bg = background.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|row| row.chunks_exact(4).filter(|px| *px != bg).count())
            .sum()
    }

    /// Summarize the frame against the scene's `background`.
    ///
    /// The luminance range and mean are reduced with trueno, which picks the
    /// widest SIMD backend the CPU offers.
    #[must_use]
    pub fn stats(&self, background: Rgba) -> FrameStats {
        let luma: Vec<f32> = (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]).luma())
            .collect();
        let luma = Vector::from_vec(luma);
        FrameStats {
            drawn: self.coverage(background),
            pixels: self.pixel_count(),
            min_luma: luma.min().unwrap_or(0.0),
            max_luma: luma.max().unwrap_or(0.0),
            mean_luma: luma.mean().unwrap_or(0.0),
            backend: luma.backend(),
        }
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// PNG expects tightly-packed rows.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    #[inline]
    fn to_storage(&self, p: Point) -> Option<(u32, u32)> {
        if self.bounds().contains(p) {
            Some((p.x as u32, self.height - 1 - p.y as u32))
        } else {
            None
        }
    }
}

/// What a rendered frame contains, as reported by [`Framebuffer::stats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Pixels that differ from the background.
    pub drawn: usize,
    /// Total pixels.
    pub pixels: usize,
    /// Darkest pixel, BT.709 luminance on the 0-255 scale.
    pub min_luma: f32,
    /// Brightest pixel.
    pub max_luma: f32,
    /// Mean luminance.
    pub mean_luma: f32,
    /// SIMD backend the reductions ran on.
    pub backend: Backend,
}

impl FrameStats {
    /// True if the scene left every pixel at the background color.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.drawn == 0
    }

    /// Fraction of pixels drawn, in `0.0..=1.0`.
    #[must_use]
    pub fn drawn_fraction(&self) -> f64 {
        if self.pixels == 0 {
            0.0
        } else {
            self.drawn as f64 / self.pixels as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % SIMD_ALIGNMENT, 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(90, 90, 50, 50, Rgba::RED);

        assert_eq!(fb.get_pixel(95, 95), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(85, 85), Some(Rgba::WHITE));
    }

    #[test]
    fn test_plot_is_y_up() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);
        fb.plot(Point::new(2, 0), Rgba::GREEN);

        // Scene row 0 is the bottom storage row.
        assert_eq!(fb.get_pixel(2, 9), Some(Rgba::GREEN));
        assert_eq!(fb.at(Point::new(2, 0)), Some(Rgba::GREEN));
    }

    #[test]
    fn test_plot_out_of_bounds_is_dropped() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);
        fb.plot(Point::new(-1, 3), Rgba::WHITE);
        fb.plot(Point::new(3, 10), Rgba::WHITE);
        assert_eq!(fb.coverage(Rgba::BLACK), 0);
        assert_eq!(fb.at(Point::new(-1, 3)), None);
    }

    #[test]
    fn test_fill_span_row_clipped() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);
        fb.fill_span(Span::new(4, -5, 3), Rgba::WHITE);
        assert_eq!(fb.coverage(Rgba::BLACK), 4);
        assert_eq!(fb.at(Point::new(0, 4)), Some(Rgba::WHITE));
        assert_eq!(fb.at(Point::new(3, 4)), Some(Rgba::WHITE));
        assert_eq!(fb.at(Point::new(4, 4)), Some(Rgba::BLACK));

        fb.fill_span(Span::new(20, 0, 3), Rgba::WHITE);
        assert_eq!(fb.coverage(Rgba::BLACK), 4);
    }

    #[test]
    fn test_stats_blank_frame() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::rgb(128, 128, 128));

        let stats = fb.stats(Rgba::rgb(128, 128, 128));
        assert!(stats.is_blank());
        assert_eq!(stats.pixels, 100);
        assert!((stats.max_luma - stats.min_luma).abs() < 1e-3);
        assert!((stats.mean_luma - 128.0).abs() < 1e-2);
    }

    #[test]
    fn test_stats_count_drawn_pixels() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);
        fb.fill_span(Span::new(0, 0, 4), Rgba::WHITE);

        let stats = fb.stats(Rgba::BLACK);
        assert!(!stats.is_blank());
        assert_eq!(stats.drawn, 5);
        assert!((stats.drawn_fraction() - 0.05).abs() < 1e-9);
        assert!(stats.min_luma.abs() < 1e-3);
        assert!((stats.max_luma - 255.0).abs() < 1e-2);
        assert!((stats.mean_luma - 255.0 * 0.05).abs() < 1e-2);
    }

    #[test]
    fn test_compact_pixels_drop_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::BLUE);
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.chunks_exact(4).all(|px| px == [0, 0, 255, 255]));
    }
}
