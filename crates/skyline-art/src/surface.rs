use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::{Color, Paint};

/// Horizontal anchoring for [`Surface::fill_text`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    /// `pos` is the top-left of the line.
    #[default]
    Left,
    /// `pos` is the top-center of the line.
    Center,
}

/// A canvas-style 2D drawing target.
///
/// The surface carries a current style (fill paint, stroke color, line width)
/// and a current path. Shape calls consume that style at the moment they are
/// issued.
///
/// # Style contract
///
/// Every artwork routine sets the style it needs before drawing and leaves the
/// style as it last set it. Nothing resets it afterwards. Code that needs a
/// clean style either sets it explicitly or brackets its calls with
/// [`save`](Surface::save) / [`restore`](Surface::restore).
///
/// Degenerate input (zero or negative sizes, empty paths) must draw nothing or a
/// degenerate shape; implementations never panic on it.
pub trait Surface {
    // ── style ─────────────────────────────────────────────────────────────

    fn set_fill(&mut self, paint: Paint);
    fn set_stroke(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    /// Pushes the current style onto a stack.
    fn save(&mut self);
    /// Pops the most recently saved style. Unbalanced calls are ignored.
    fn restore(&mut self);

    // ── immediate shapes ──────────────────────────────────────────────────

    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2);

    // ── paths ─────────────────────────────────────────────────────────────

    /// Discards the current path.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Appends a circular arc swept from `start` to `end` radians.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
    fn close_path(&mut self);
    /// Fills the current path with the fill style. The path is kept.
    fn fill(&mut self);
    /// Strokes the current path with the stroke style. The path is kept.
    fn stroke(&mut self);

    // ── text ──────────────────────────────────────────────────────────────

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign);
    /// Advance width of `text` at `size`, in logical pixels.
    fn measure_text(&self, text: &str, size: f32) -> f32;

    // ── provided helpers ──────────────────────────────────────────────────

    #[inline]
    fn set_fill_color(&mut self, color: Color) {
        self.set_fill(Paint::Solid(color));
    }

    /// Sets the fill to `color` and fills `rect`.
    fn rect(&mut self, color: Color, rect: Rect) {
        self.set_fill_color(color);
        self.fill_rect(rect);
    }

    /// Sets the fill to `color` and fills a circle.
    fn circle(&mut self, color: Color, center: Vec2, radius: f32) {
        self.set_fill_color(color);
        self.fill_circle(center, radius);
    }

    /// Sets the fill to `color` and fills an ellipse.
    fn ellipse(&mut self, color: Color, center: Vec2, radii: Vec2) {
        self.set_fill_color(color);
        self.fill_ellipse(center, radii);
    }

    /// Sets the fill to `color` and fills the closed polygon through `points`.
    fn polygon(&mut self, color: Color, points: &[Vec2]) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill_color(color);
        self.begin_path();
        self.move_to(first);
        for &p in rest {
            self.line_to(p);
        }
        self.close_path();
        self.fill();
    }

    /// Sets the stroke style and strokes a single segment.
    fn line(&mut self, color: Color, width: f32, from: Vec2, to: Vec2) {
        self.set_stroke(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from);
        self.line_to(to);
        self.stroke();
    }
}
