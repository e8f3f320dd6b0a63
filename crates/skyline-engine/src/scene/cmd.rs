use crate::coords::{Rect, Vec2};
use crate::scene::shapes::fill::{CircleCmd, EllipseCmd, RectCmd, RoundedRectCmd};
use crate::scene::shapes::path::{PathCmd, PathStyle};
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add the payload under `scene::shapes::*`
/// - add a new variant here and to [`DrawCmd::bounds`]
/// - implement push helpers inside that shape module
/// - teach `render::Rasterizer` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Ellipse(EllipseCmd),
    Path(PathCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Conservative axis-aligned extent of everything this command may touch.
    ///
    /// Arcs count as their full circle and strokes add half the line width.
    /// Returns `None` for commands with no geometry (an empty path).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawCmd::Rect(c) => Some(c.rect.normalized()),
            DrawCmd::RoundedRect(c) => Some(c.rect.normalized()),
            DrawCmd::Circle(c) => Some(Rect::around(c.center, Vec2::splat(c.radius.abs()))),
            DrawCmd::Ellipse(c) => {
                Some(Rect::around(c.center, Vec2::new(c.radii.x.abs(), c.radii.y.abs())))
            }
            DrawCmd::Path(c) => {
                let hull = c.hull()?;
                match &c.style {
                    PathStyle::Fill(_) => Some(hull),
                    PathStyle::Stroke(s) => Some(hull.inflate(s.width.abs() * 0.5)),
                }
            }
            DrawCmd::Text(c) => Some(Rect::new(c.origin.x, c.origin.y, c.width, c.size * 1.2)),
        }
    }
}
