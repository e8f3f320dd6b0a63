//! Draw command payloads, one module per shape family. Each module also adds
//! its `push_*` helpers to [`DrawList`](crate::scene::DrawList).

pub mod fill;
pub mod path;
pub mod text;

use crate::paint::Color;

/// Outline drawn centered on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
