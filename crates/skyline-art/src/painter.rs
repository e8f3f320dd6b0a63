use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::{Color, Paint};
use skyline_engine::scene::shapes::path::{PathEl, PathStyle};
use skyline_engine::scene::shapes::text::TextCmd;
use skyline_engine::scene::{DrawList, Stroke, ZIndex};
use skyline_engine::text::{FontId, FontSystem};

use crate::surface::{Surface, TextAlign};

/// Advance per character, as a fraction of the font size, when no font is loaded.
pub const FALLBACK_ADVANCE: f32 = 0.55;

/// Canvas style state saved and restored by [`Surface::save`] / [`Surface::restore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub fill: Paint,
    pub stroke: Color,
    pub line_width: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self { fill: Paint::Solid(Color::black()), stroke: Color::black(), line_width: 1.0 }
    }
}

/// Recording [`Surface`] over the engine's [`DrawList`].
///
/// Every shape becomes one draw command at the painter's layer, so a host can
/// record the background below its own game layers and rasterize or inspect the
/// list afterwards.
///
/// # Example
/// ```rust,ignore
/// let mut list = DrawList::new();
/// let mut painter = Painter::new(&mut list).font(&fonts, body);
/// skyline_art::render_background(&mut painter);
/// ```
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: Option<(&'a FontSystem, FontId)>,
    layer: ZIndex,
    style: StyleState,
    saved: Vec<StyleState>,
    path: Vec<PathEl>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self {
            draw_list,
            fonts: None,
            layer: ZIndex::BACKGROUND,
            style: StyleState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Z-layer every recorded command is pushed at.
    pub fn layer(mut self, z: ZIndex) -> Self { self.layer = z; self }

    /// Font used for measuring and recording text.
    pub fn font(mut self, fonts: &'a FontSystem, id: FontId) -> Self { self.fonts = Some((fonts, id)); self }

    /// Current style.
    #[inline]
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Number of unmatched [`Surface::save`] calls.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    fn stroke_style(&self) -> Stroke {
        Stroke::new(self.style.line_width, self.style.stroke)
    }
}

impl Surface for Painter<'_> {
    fn set_fill(&mut self, paint: Paint) {
        self.style.fill = paint;
    }

    fn set_stroke(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.style.line_width = width;
    }

    fn save(&mut self) {
        self.saved.push(self.style.clone());
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.draw_list.push_rect(self.layer, rect, self.style.fill.clone());
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let (min, max) = (rect.min(), rect.max());
        let outline = vec![
            PathEl::MoveTo(min),
            PathEl::LineTo(Vec2::new(max.x, min.y)),
            PathEl::LineTo(max),
            PathEl::LineTo(Vec2::new(min.x, max.y)),
            PathEl::Close,
        ];
        self.draw_list.push_path(self.layer, outline, PathStyle::Stroke(self.stroke_style()));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii) {
        self.draw_list.push_rounded_rect(self.layer, rect, radii, self.style.fill.clone());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.draw_list.push_circle(self.layer, center, radius, self.style.fill.clone());
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2) {
        self.draw_list.push_ellipse(self.layer, center, radii, self.style.fill.clone());
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.push(PathEl::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.push(PathEl::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.path.push(PathEl::Arc { center, radius, start, end });
    }

    fn close_path(&mut self) {
        self.path.push(PathEl::Close);
    }

    fn fill(&mut self) {
        let style = PathStyle::Fill(self.style.fill.clone());
        self.draw_list.push_path(self.layer, self.path.clone(), style);
    }

    fn stroke(&mut self) {
        let style = PathStyle::Stroke(self.stroke_style());
        self.draw_list.push_path(self.layer, self.path.clone(), style);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign) {
        let width = self.measure_text(text, size);
        let origin = match align {
            TextAlign::Left => pos,
            TextAlign::Center => Vec2::new(pos.x - width * 0.5, pos.y),
        };
        // Gradients have no meaning for glyphs; use the first stop.
        let color = match &self.style.fill {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.stops.first().map(|s| s.color).unwrap_or_default(),
        };
        self.draw_list.push_text(self.layer, TextCmd {
            text: text.to_owned(),
            font: self.fonts.map(|(_, id)| id),
            size,
            color,
            origin,
            width,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        match self.fonts {
            Some((fonts, id)) => fonts.measure_text(text, id, size).x,
            None => text.chars().count() as f32 * size * FALLBACK_ADVANCE,
        }
    }
}
