//! CPU rendering subsystem.
//!
//! The rasterizer consumes a `scene` draw stream and produces pixels via tiny-skia.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - one logical pixel maps to one device pixel

mod error;
mod raster;

pub use error::RasterError;
pub use raster::{RasterConfig, Rasterizer};

/// The tiny-skia pixel buffer produced by [`Rasterizer::render`].
pub use resvg::tiny_skia::Pixmap;
