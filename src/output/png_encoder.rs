//! PNG snapshot encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Rasters are written as 8-bit
//! RGBA, top row first, exactly as they appear on screen.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer snapshots.
#[derive(Debug, Clone, Default)]
pub struct PngEncoder {
    title: Option<String>,
    compression: png::Compression,
}

impl PngEncoder {
    /// Create an encoder with default compression and no metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed a `Title` text chunk, e.g. the demo name.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the deflate compression level.
    #[must_use]
    pub fn compression(mut self, compression: png::Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(&self, fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(&self, fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.compression);
        if let Some(title) = &self.title {
            encoder.add_text_chunk("Title".to_string(), title.clone())?;
        }

        let mut writer = encoder.write_header()?;
        // Compact pixels drop the SIMD stride padding.
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }
}
