use std::fmt;

/// Error returned by [`Rasterizer::render`](super::Rasterizer::render).
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Viewport is zero, negative or non-finite.
    InvalidViewport { width: f32, height: f32 },
    /// The pixel buffer could not be allocated for the requested size.
    Allocation { width: u32, height: u32 },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidViewport { width, height } => {
                write!(f, "raster error: invalid viewport {width}x{height}")
            }
            RasterError::Allocation { width, height } => {
                write!(f, "raster error: cannot allocate {width}x{height} pixmap")
            }
        }
    }
}

impl std::error::Error for RasterError {}
