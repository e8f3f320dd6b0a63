use super::Rect;

/// Size of the drawing target in logical pixels.
///
/// The rasterizer allocates its pixel buffer from this, and bounds checks on a
/// recorded scene compare against [`Viewport::bounds`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// The full target area, anchored at the origin.
    #[inline]
    pub const fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Pixel dimensions, rounded up. Invalid viewports yield `(0, 0)`.
    pub fn pixel_size(self) -> (u32, u32) {
        if !self.is_valid() {
            return (0, 0);
        }
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}
