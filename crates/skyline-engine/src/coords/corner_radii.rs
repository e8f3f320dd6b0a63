/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Only the top corners rounded, e.g. awnings and arched doors.
    #[inline]
    pub const fn top(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: 0.0, bottom_left: 0.0 }
    }

    /// Radii clamped to `[0, min(w, h) / 2]` so opposite corners never overlap.
    pub fn fitted(self, w: f32, h: f32) -> Self {
        let max = (w.min(h) * 0.5).max(0.0);
        let fit = |r: f32| r.clamp(0.0, max);
        Self::new(fit(self.top_left), fit(self.top_right), fit(self.bottom_right), fit(self.bottom_left))
    }
}
