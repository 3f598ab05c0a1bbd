//! Framebuffer display inside a ratatui frame.
//!
//! Each terminal cell shows two vertically stacked samples with `▀`: the
//! foreground colors the upper half, the background the lower. A sample is
//! a `scale x scale` block of framebuffer pixels, pooled the same way the
//! text preview pools them.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{DisplayBounds, Point};
use crate::output::{cell_block, pool_block};

/// Maps a terminal area to scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
    scale: u32,
}

impl Viewport {
    /// Viewport over `area` with `scale` pixels per half-cell sample.
    #[must_use]
    pub fn new(area: Rect, scale: u32) -> Self {
        Self { area, scale: scale.max(1) }
    }

    /// Terminal area.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Scene size that exactly fills the area.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        DisplayBounds::new(
            u32::from(self.area.width) * self.scale,
            u32::from(self.area.height) * 2 * self.scale,
        )
    }

    /// Scene point under the center of terminal cell `(column, row)`.
    ///
    /// Returns `None` outside the area.
    #[must_use]
    pub fn to_scene(&self, column: u16, row: u16) -> Option<Point> {
        let a = self.area;
        if column < a.x || row < a.y || column >= a.right() || row >= a.bottom() {
            return None;
        }
        let col = u32::from(column - a.x);
        let row = u32::from(row - a.y);
        let x = col * self.scale + self.scale / 2;
        let storage_y = row * 2 * self.scale + self.scale;
        let height = self.bounds().height();
        Some(Point::new(x as i32, (height - 1 - storage_y) as i32))
    }
}

/// Widget drawing a framebuffer with half-block cells.
#[derive(Debug)]
pub struct FramebufferView<'a> {
    fb: &'a Framebuffer,
    background: Rgba,
}

impl<'a> FramebufferView<'a> {
    /// Show `fb`; `background` is the color pooling ignores.
    #[must_use]
    pub fn new(fb: &'a Framebuffer, background: Rgba) -> Self {
        Self { fb, background }
    }

    fn sample(&self, col: u16, row: u32, cols: u16, rows: u32) -> Color {
        let block = cell_block(self.fb, u32::from(col), row, u32::from(cols), rows);
        let c = pool_block(self.fb, block, self.background);
        Color::Rgb(c.r, c.g, c.b)
    }
}

impl Widget for FramebufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let samples = u32::from(area.height) * 2;
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.sample(col, u32::from(row) * 2, area.width, samples);
                let bottom = self.sample(col, u32::from(row) * 2 + 1, area.width, samples);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀').set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_bounds_fill_area() {
        let viewport = Viewport::new(Rect::new(3, 1, 100, 30), 8);
        assert_eq!(viewport.bounds(), DisplayBounds::new(800, 480));
        assert_eq!(Viewport::new(Rect::new(0, 0, 4, 4), 0).bounds(), DisplayBounds::new(4, 8));
    }

    #[test]
    fn test_viewport_flips_rows() {
        let viewport = Viewport::new(Rect::new(0, 1, 10, 5), 4);

        // Storage row 36 of 40 is scene row 3.
        assert_eq!(viewport.to_scene(0, 5), Some(Point::new(2, 3)));
        // Top cell row is near the top of the scene.
        assert_eq!(viewport.to_scene(9, 1), Some(Point::new(38, 35)));
        assert_eq!(viewport.to_scene(0, 0), None);
        assert_eq!(viewport.to_scene(10, 3), None);
        assert_eq!(viewport.to_scene(0, 6), None);
    }

    #[test]
    fn test_view_draws_half_blocks() {
        let bg = Rgba::BLACK;
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(bg);
        // One pixel in the top-left sample only.
        fb.set_pixel(0, 0, Rgba::RED);

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        FramebufferView::new(&fb, bg).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));

        let other = &buf[(1, 1)];
        assert_eq!(other.fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_view_respects_area_offset() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);

        let full = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(full);
        FramebufferView::new(&fb, Rgba::BLACK).render(Rect::new(2, 1, 2, 2), &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(2, 1)].fg, Color::Rgb(255, 255, 255));
    }
}
