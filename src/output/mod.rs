//! Output encoders (PNG snapshots, terminal previews).

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};

#[cfg(feature = "tui")]
pub(crate) use terminal::{cell_block, pool_block};
