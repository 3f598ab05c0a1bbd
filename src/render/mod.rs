//! Rasterization and clipping.
//!
//! Integer rasterizers for lines and circles plus a parametric segment
//! clipper. Rasterizers write into any [`PixelSink`]; the `rasterize_*`
//! helpers collect into bounded [`Fragments`] for callers that want a value.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: all-octant integer line drawing
//! - **Midpoint Circle**: outline, brush-stamped ring and span-filled disk
//! - **Liang-Barsky**: parametric clipping against an axis-aligned window
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y.-D., Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."

mod brush;
mod circle;
mod clip;
mod line;
mod sink;

pub use brush::Brush;
pub use circle::{
    draw_circle_outline, draw_disk, draw_ring, rasterize_circle, CirclePoints, CircleStyle,
    Octants,
};
pub use clip::{clip, clip_all, ClippedSegment, PARALLEL_EPSILON};
pub use line::{draw_line, rasterize_line, LinePoints};
pub use sink::{BrushStamp, Fragments, Paint, PixelSink};
