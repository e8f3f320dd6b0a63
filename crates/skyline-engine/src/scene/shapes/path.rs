use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// One path verb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Circular arc swept linearly from `start` to `end` (radians).
    ///
    /// A line joins the current point to the arc start, as on an HTML canvas.
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    Close,
}

/// How a recorded path is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum PathStyle {
    Fill(Paint),
    Stroke(Stroke),
}

/// Path draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub elements: Vec<PathEl>,
    pub style: PathStyle,
}

impl PathCmd {
    /// Bounding box of the path's control geometry, arcs taken as full circles.
    pub fn hull(&self) -> Option<Rect> {
        let points = self.elements.iter().flat_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => [p, p],
            PathEl::Arc { center, radius, .. } => {
                let r = Vec2::splat(radius.abs());
                [center - r, center + r]
            }
            PathEl::Close => [Vec2::new(f32::NAN, f32::NAN); 2],
        });
        Rect::bounding(points.filter(|p| p.is_finite()))
    }
}

impl DrawList {
    /// Records a filled or stroked path. Empty paths are dropped.
    pub fn push_path(&mut self, z: ZIndex, elements: Vec<PathEl>, style: PathStyle) {
        if elements.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Path(PathCmd { elements, style }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn hull_includes_full_arc_circle() {
        let cmd = PathCmd {
            elements: vec![
                PathEl::MoveTo(Vec2::new(0.0, 0.0)),
                PathEl::Arc { center: Vec2::new(10.0, 10.0), radius: 5.0, start: 0.0, end: 1.0 },
                PathEl::Close,
            ],
            style: PathStyle::Fill(Paint::Solid(Color::black())),
        };
        assert_eq!(cmd.hull(), Some(Rect::new(0.0, 0.0, 15.0, 15.0)));
    }

    #[test]
    fn empty_path_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_path(ZIndex::default(), Vec::new(), PathStyle::Fill(Color::black().into()));
        assert!(list.is_empty());
    }
}
