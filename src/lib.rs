//! # raster-lab
//!
//! Classic scan-conversion and clipping algorithms with interactive demos.
//!
//! The core is pure integer/float geometry writing into a [`render::PixelSink`],
//! so the algorithms can target a framebuffer, a point list or a test
//! recorder alike. Coordinates are y-up, origin bottom-left.
//!
//! ## Demos
//!
//! - **Lines**: Bresenham lines, thickened with a disk brush
//! - **Circles**: concentric midpoint rings with a hue gradient
//! - **Clipping**: Liang-Barsky segments against a movable window
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_lab::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64).unwrap();
//! fb.clear(Rgba::BLACK);
//!
//! let mut paint = Paint::new(&mut fb, Rgba::WHITE);
//! draw_line(&mut paint, Point::new(4, 4), Point::new(60, 40), 3);
//! draw_ring(&mut paint, Circle::new(Point::new(32, 32), 20, 2));
//!
//! let window = ClipRect::new(10, 10, 50, 50);
//! let part = clip(window, Segment::from_coords(0, 30, 63, 30)).unwrap();
//! assert_eq!(part.to_segment(), Segment::from_coords(10, 30, 50, 30));
//! ```
//!
//! ## Feature Flags
//!
//! - `tui` (default): terminal app, YAML config, logging setup and the
//!   `raster-lab` binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal 4(1).
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for
//!   line clipping." ACM TOG 3(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel math converts between integer widths constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the hue gradient.
pub mod color;

/// RGBA framebuffer with y-up plotting.
pub mod framebuffer;

/// Points, segments, clip windows, circles and display bounds.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization: lines, circles, brushes and clipping.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

/// Demo scene state.
pub mod scene;

// ============================================================================
// Application Modules
// ============================================================================

/// Interactive terminal application.
#[cfg(feature = "tui")]
#[cfg_attr(docsrs, doc(cfg(feature = "tui")))]
pub mod app;

/// YAML configuration.
#[cfg(feature = "tui")]
#[cfg_attr(docsrs, doc(cfg(feature = "tui")))]
pub mod config;

/// Tracing subscriber setup.
#[cfg(feature = "tui")]
#[cfg_attr(docsrs, doc(cfg(feature = "tui")))]
pub mod logging;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-lab operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use raster_lab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{hue_gradient, Hsva, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{FrameStats, Framebuffer};
    pub use crate::geometry::{
        Circle, ClipRect, DisplayBounds, Edge, Point, PointF, Segment, Span,
    };
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        clip, clip_all, draw_circle_outline, draw_disk, draw_line, draw_ring, rasterize_circle,
        rasterize_line, Brush, CircleStyle, ClippedSegment, Fragments, Paint, PixelSink,
    };
    pub use crate::scene::{Demo, SceneSettings, Scenes};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
