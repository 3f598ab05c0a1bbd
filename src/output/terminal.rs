//! Terminal preview encoder (ASCII / ANSI half-blocks).
//!
//! Renders framebuffers to terminal-compatible text. A terminal cell covers
//! many framebuffer pixels, and one-pixel rasters vanish under plain
//! nearest-neighbour sampling, so every cell pools its source block and
//! keeps the pixel that stands out most from the background.
//!
//! - ASCII: luminance ramp ` .:-=+*#%@`
//! - Half-block: `▀` with 24-bit foreground/background, two rows per line

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters with ANSI 24-bit color
    #[default]
    HalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    columns: Option<u32>,
    background: Rgba,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Monospace cells are roughly twice as tall as wide.
    const CHAR_ASPECT: f32 = 2.0;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), columns: None, background: Rgba::BLACK }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output width in characters. Defaults to `min(80, width)`.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    /// Background color that pooling treats as empty.
    #[must_use]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::HalfBlock => self.render_half_block(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.grid(fb, Self::CHAR_ASPECT);
        let mut output = String::with_capacity((cols + 1) as usize * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let color = pool_block(fb, cell_block(fb, col, row, cols, rows), self.background);
                output.push(Self::ASCII_RAMP[Self::luma_to_index(luma(color))]);
            }
            output.push('\n');
        }

        output
    }

    fn render_half_block(&self, fb: &Framebuffer) -> String {
        // Each character shows two vertically stacked samples.
        let (cols, rows) = self.grid(fb, Self::CHAR_ASPECT / 2.0);
        let rows = (rows + 1) & !1;
        let mut output = String::with_capacity((cols * 40 + 5) as usize * (rows / 2) as usize);

        for row in (0..rows).step_by(2) {
            for col in 0..cols {
                let top = pool_block(fb, cell_block(fb, col, row, cols, rows), self.background);
                let bottom =
                    pool_block(fb, cell_block(fb, col, row + 1, cols, rows), self.background);
                // ▀ U+2580: foreground paints the top half, background the bottom.
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    /// Output grid `(columns, sample rows)` preserving the framebuffer aspect.
    fn grid(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let cols = self.columns.unwrap_or_else(|| 80u32.min(fb.width()));
        let fb_aspect = fb.width() as f32 / fb.height() as f32;
        let rows = (cols as f32 / fb_aspect / char_aspect).round() as u32;
        (cols, rows.max(1))
    }

    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

/// A block of storage pixels `x0..x1`, `y0..y1` (top row is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

/// The storage block covered by cell `(col, row)` of a `cols x rows` grid.
///
/// Blocks tile the framebuffer and are never empty.
pub(crate) fn cell_block(fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> Block {
    let span = |i: u32, n: u32, len: u32| {
        let n = u64::from(n.max(1));
        let len64 = u64::from(len);
        let start = (u64::from(i) * len64 / n) as u32;
        let end = ((u64::from(i) + 1) * len64 / n) as u32;
        let start = start.min(len - 1);
        (start, end.clamp(start + 1, len))
    };
    let (x0, x1) = span(col, cols, fb.width());
    let (y0, y1) = span(row, rows, fb.height());
    Block { x0, y0, x1, y1 }
}

/// The pixel of `block` farthest from `background`, or `background` if the
/// block is empty of content.
pub(crate) fn pool_block(fb: &Framebuffer, block: Block, background: Rgba) -> Rgba {
    let mut best = background;
    let mut best_dist = 0u32;
    for y in block.y0..block.y1 {
        let Some(row) = fb.row(y) else { continue };
        let start = block.x0 as usize * 4;
        let end = (block.x1 as usize * 4).min(row.len());
        for px in row[start..end].chunks_exact(4) {
            let color = Rgba::new(px[0], px[1], px[2], px[3]);
            let dist = color_distance(color, background);
            if dist > best_dist {
                best = color;
                best_dist = dist;
            }
        }
    }
    best
}

fn color_distance(a: Rgba, b: Rgba) -> u32 {
    u32::from(a.r.abs_diff(b.r)) + u32::from(a.g.abs_diff(b.g)) + u32::from(a.b.abs_diff(b.b))
}

/// Rec. 709 luminance in `[0, 1]`.
fn luma(color: Rgba) -> f32 {
    0.2126 * (f32::from(color.r) / 255.0)
        + 0.7152 * (f32::from(color.g) / 255.0)
        + 0.0722 * (f32::from(color.b) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Span};

    #[test]
    fn test_ascii_render_white() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).columns(5).render(&fb);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_ascii_render_black() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).columns(5).render(&fb);

        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_thin_line_survives_downsampling() {
        let mut fb = Framebuffer::new(400, 200).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        fb.fill_span(Span::new(101, 0, 399), Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).columns(40).render(&fb);

        let lit_rows = output.lines().filter(|line| line.contains('@')).count();
        assert_eq!(lit_rows, 1);
        let lit_line = output.lines().find(|line| line.contains('@')).unwrap();
        assert!(lit_line.chars().all(|c| c == '@'));
    }

    #[test]
    fn test_half_block_contains_ansi() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::RED);

        let output = TerminalEncoder::new().columns(5).render(&fb);

        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_half_block_top_is_scene_top() {
        let mut fb = Framebuffer::new(4, 4).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        // Top scene row.
        fb.fill_span(Span::new(3, 0, 3), Rgba::GREEN);

        let output = TerminalEncoder::new().columns(4).render(&fb);
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("\x1b[38;2;0;255;0m"));
    }

    #[test]
    fn test_aspect_ratio_preservation() {
        let fb = Framebuffer::new(200, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).columns(40).render(&fb);

        // 2:1 framebuffer at 2:1 character cells gives 10 rows.
        assert_eq!(output.lines().count(), 10);
        assert!(output.lines().all(|line| line.chars().count() == 40));
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let fb = Framebuffer::new(1000, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).render(&fb);
        let first_line = output.lines().next().expect("iterator should have next element");

        assert_eq!(first_line.chars().count(), 80);
    }

    #[test]
    fn test_blocks_tile_framebuffer() {
        let fb = Framebuffer::new(37, 23).expect("framebuffer creation should succeed");
        let mut covered = 0u32;
        for row in 0..5 {
            for col in 0..7 {
                let b = cell_block(&fb, col, row, 7, 5);
                assert!(b.x1 > b.x0 && b.y1 > b.y0);
                covered += (b.x1 - b.x0) * (b.y1 - b.y0);
            }
        }
        assert_eq!(covered, 37 * 23);
    }

    #[test]
    fn test_more_cells_than_pixels() {
        let fb = Framebuffer::new(3, 3).expect("framebuffer creation should succeed");
        let b = cell_block(&fb, 9, 9, 10, 10);
        assert!(b.x1 <= 3 && b.x0 < b.x1);
    }

    #[test]
    fn test_pool_prefers_content() {
        let mut fb = Framebuffer::new(8, 8).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        fb.plot(Point::new(5, 5), Rgba::rgb(200, 10, 10));
        let block = Block { x0: 0, y0: 0, x1: 8, y1: 8 };
        assert_eq!(pool_block(&fb, block, Rgba::BLACK), Rgba::rgb(200, 10, 10));
        assert_eq!(pool_block(&fb, block, Rgba::rgb(200, 10, 10)), Rgba::BLACK);
    }
}
