use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Two-stop padded gradient from `from` at `start` to `to` at `end`.
    pub fn between(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)], SpreadMode::Pad)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_axis_is_invalid() {
        let p = Vec2::new(3.0, 3.0);
        assert!(!LinearGradient::between(p, p, Color::black(), Color::white()).is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(0.0, 10.0),
            vec![ColorStop::new(0.0, Color::black())],
            SpreadMode::Pad,
        );
        assert!(!g.is_valid());
    }
}
