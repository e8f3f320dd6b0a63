//! Filled primitives: rectangles, rounded rectangles, circles and ellipses.

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
}

/// Axis-aligned ellipse; `radii` holds the horizontal and vertical radius.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint }));
    }

    /// Shorthand for [`push_rect`](Self::push_rect) with a solid color.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Paint::Solid(color));
    }

    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, paint: Paint) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint }));
    }

    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, paint: Paint) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, paint }));
    }

    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, center: Vec2, radii: Vec2, paint: Paint) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd { center, radii, paint }));
    }
}
