use std::f32::consts::{PI, TAU};

use resvg::tiny_skia as sk;

use crate::coords::{CornerRadii, Rect, Vec2, Viewport};
use crate::paint::{Color, Paint, SpreadMode};
use crate::scene::shapes::path::{PathEl, PathStyle};
use crate::scene::shapes::text::TextCmd;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::RasterError;

/// Cubic control-point factor for quarter-circle corners.
const KAPPA: f32 = 0.552_284_8;

/// Maximum angle covered by one line segment when flattening arcs.
const ARC_STEP: f32 = PI / 24.0;

/// Rasterizer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterConfig {
    pub viewport: Viewport,
    /// Color the pixmap is cleared to before drawing.
    pub clear: Color,
    pub anti_alias: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(900.0, 600.0),
            clear: Color::transparent(),
            anti_alias: true,
        }
    }
}

impl RasterConfig {
    pub fn viewport(mut self, v: Viewport) -> Self { self.viewport = v; self }
    pub fn clear(mut self, v: Color) -> Self { self.clear = v; self }
    pub fn anti_alias(mut self, v: bool) -> Self { self.anti_alias = v; self }
}

/// CPU renderer for a recorded [`DrawList`], backed by tiny-skia.
///
/// Items are drawn in paint order. Degenerate geometry (zero-size rects, empty
/// paths, invalid gradients) is skipped and counted rather than reported.
#[derive(Debug, Default)]
pub struct Rasterizer {
    config: RasterConfig,
    skipped: usize,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config, skipped: 0 }
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Number of items skipped as degenerate during the last [`render`](Self::render).
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Plays `draw_list` into a freshly allocated pixmap.
    ///
    /// Text is drawn only when `fonts` holds the font its command refers to.
    pub fn render(
        &mut self,
        draw_list: &mut DrawList,
        fonts: Option<&FontSystem>,
    ) -> Result<sk::Pixmap, RasterError> {
        let viewport = self.config.viewport;
        if !viewport.is_valid() {
            return Err(RasterError::InvalidViewport { width: viewport.width, height: viewport.height });
        }
        let (w, h) = viewport.pixel_size();
        let mut pixmap = sk::Pixmap::new(w, h).ok_or(RasterError::Allocation { width: w, height: h })?;
        let [r, g, b, a] = self.config.clear.to_srgb_u8();
        pixmap.fill(sk::Color::from_rgba8(r, g, b, a));

        self.skipped = 0;
        let mut drawn = 0usize;
        for item in draw_list.iter_in_paint_order() {
            if self.draw(&mut pixmap, &item.cmd, fonts) {
                drawn += 1;
            } else {
                self.skipped += 1;
            }
        }

        log::debug!("rasterized {drawn} items into {w}x{h} ({} skipped)", self.skipped);
        Ok(pixmap)
    }

    /// Returns `false` when the command produced nothing.
    fn draw(&self, pixmap: &mut sk::Pixmap, cmd: &DrawCmd, fonts: Option<&FontSystem>) -> bool {
        let identity = sk::Transform::identity();
        match cmd {
            DrawCmd::Rect(c) => {
                let r = c.rect.normalized();
                if r.is_empty() {
                    return self.skip("rect", cmd);
                }
                let (Some(rect), Some(paint)) =
                    (sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y), self.paint(&c.paint))
                else {
                    return self.skip("rect", cmd);
                };
                let path = sk::PathBuilder::from_rect(rect);
                pixmap.fill_path(&path, &paint, sk::FillRule::Winding, identity, None);
                true
            }
            DrawCmd::RoundedRect(c) => {
                let (Some(path), Some(paint)) = (rounded_rect_path(c.rect, c.radii), self.paint(&c.paint))
                else {
                    return self.skip("rounded rect", cmd);
                };
                pixmap.fill_path(&path, &paint, sk::FillRule::Winding, identity, None);
                true
            }
            DrawCmd::Circle(c) => {
                let (Some(path), Some(paint)) =
                    (oval_path(c.center, Vec2::splat(c.radius)), self.paint(&c.paint))
                else {
                    return self.skip("circle", cmd);
                };
                pixmap.fill_path(&path, &paint, sk::FillRule::Winding, identity, None);
                true
            }
            DrawCmd::Ellipse(c) => {
                let (Some(path), Some(paint)) = (oval_path(c.center, c.radii), self.paint(&c.paint)) else {
                    return self.skip("ellipse", cmd);
                };
                pixmap.fill_path(&path, &paint, sk::FillRule::Winding, identity, None);
                true
            }
            DrawCmd::Path(c) => {
                let Some(path) = flatten_path(&c.elements) else {
                    return self.skip("path", cmd);
                };
                match &c.style {
                    PathStyle::Fill(fill) => {
                        let Some(paint) = self.paint(fill) else {
                            return self.skip("path fill", cmd);
                        };
                        pixmap.fill_path(&path, &paint, sk::FillRule::Winding, identity, None);
                    }
                    PathStyle::Stroke(s) => {
                        if s.width <= 0.0 {
                            return self.skip("path stroke", cmd);
                        }
                        let Some(paint) = self.paint(&Paint::Solid(s.color)) else {
                            return self.skip("path stroke", cmd);
                        };
                        let stroke = sk::Stroke { width: s.width, ..sk::Stroke::default() };
                        pixmap.stroke_path(&path, &paint, &stroke, identity, None);
                    }
                }
                true
            }
            DrawCmd::Text(c) => match (fonts, c.font) {
                (Some(fonts), Some(_)) => draw_text(pixmap, fonts, c),
                _ => self.skip("text without font", cmd),
            },
        }
    }

    fn skip(&self, what: &str, cmd: &DrawCmd) -> bool {
        log::trace!("skipping degenerate {what}: {:?}", cmd.bounds());
        false
    }

    fn paint(&self, paint: &Paint) -> Option<sk::Paint<'static>> {
        let mut out = sk::Paint { anti_alias: self.config.anti_alias, ..sk::Paint::default() };
        match paint {
            Paint::Solid(c) => {
                let [r, g, b, a] = c.to_srgb_u8();
                out.set_color_rgba8(r, g, b, a);
            }
            Paint::LinearGradient(lg) => {
                if !lg.is_valid() {
                    return None;
                }
                let stops = lg
                    .stops
                    .iter()
                    .map(|s| {
                        let [r, g, b, a] = s.color.to_srgb_u8();
                        sk::GradientStop::new(s.t, sk::Color::from_rgba8(r, g, b, a))
                    })
                    .collect();
                let spread = match lg.spread {
                    SpreadMode::Pad => sk::SpreadMode::Pad,
                    SpreadMode::Repeat => sk::SpreadMode::Repeat,
                    SpreadMode::Reflect => sk::SpreadMode::Reflect,
                };
                out.shader = sk::LinearGradient::new(
                    sk::Point::from_xy(lg.start.x, lg.start.y),
                    sk::Point::from_xy(lg.end.x, lg.end.y),
                    stops,
                    spread,
                    sk::Transform::identity(),
                )?;
            }
        }
        Some(out)
    }
}

// ── geometry ──────────────────────────────────────────────────────────────

fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Option<sk::Path> {
    let r = rect.normalized();
    if r.is_empty() {
        return None;
    }
    let k = radii.fitted(r.size.x, r.size.y);
    let (x0, y0) = (r.origin.x, r.origin.y);
    let (x1, y1) = (r.max().x, r.max().y);

    let mut pb = sk::PathBuilder::new();
    pb.move_to(x0 + k.top_left, y0);
    pb.line_to(x1 - k.top_right, y0);
    corner(&mut pb, Vec2::new(x1 - k.top_right, y0), Vec2::new(x1, y0 + k.top_right), Vec2::new(x1, y0));
    pb.line_to(x1, y1 - k.bottom_right);
    corner(&mut pb, Vec2::new(x1, y1 - k.bottom_right), Vec2::new(x1 - k.bottom_right, y1), Vec2::new(x1, y1));
    pb.line_to(x0 + k.bottom_left, y1);
    corner(&mut pb, Vec2::new(x0 + k.bottom_left, y1), Vec2::new(x0, y1 - k.bottom_left), Vec2::new(x0, y1));
    pb.line_to(x0, y0 + k.top_left);
    corner(&mut pb, Vec2::new(x0, y0 + k.top_left), Vec2::new(x0 + k.top_left, y0), Vec2::new(x0, y0));
    pb.close();
    pb.finish()
}

fn oval_path(center: Vec2, radii: Vec2) -> Option<sk::Path> {
    let (rx, ry) = (radii.x.abs(), radii.y.abs());
    if rx <= 0.0 || ry <= 0.0 || !center.is_finite() {
        return None;
    }
    let (l, t, r, b) = (center.x - rx, center.y - ry, center.x + rx, center.y + ry);

    let mut pb = sk::PathBuilder::new();
    pb.move_to(center.x, t);
    corner(&mut pb, Vec2::new(center.x, t), Vec2::new(r, center.y), Vec2::new(r, t));
    corner(&mut pb, Vec2::new(r, center.y), Vec2::new(center.x, b), Vec2::new(r, b));
    corner(&mut pb, Vec2::new(center.x, b), Vec2::new(l, center.y), Vec2::new(l, b));
    corner(&mut pb, Vec2::new(l, center.y), Vec2::new(center.x, t), Vec2::new(l, t));
    pb.close();
    pb.finish()
}

/// Quarter-ellipse from `from` to `to` bulging towards the sharp corner `at`.
fn corner(pb: &mut sk::PathBuilder, from: Vec2, to: Vec2, at: Vec2) {
    if from == to {
        return;
    }
    let c1 = from + (at - from) * KAPPA;
    let c2 = to + (at - to) * KAPPA;
    pb.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
}

/// Converts canvas-style path verbs into a tiny-skia path, flattening arcs.
fn flatten_path(elements: &[PathEl]) -> Option<sk::Path> {
    let mut pb = sk::PathBuilder::new();
    let mut open = false;

    for el in elements {
        match *el {
            PathEl::MoveTo(p) => {
                pb.move_to(p.x, p.y);
                open = true;
            }
            PathEl::LineTo(p) => {
                if open {
                    pb.line_to(p.x, p.y);
                } else {
                    pb.move_to(p.x, p.y);
                    open = true;
                }
            }
            PathEl::Arc { center, radius, start, end } => {
                let sweep = (end - start).clamp(-TAU, TAU);
                let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
                for i in 0..=steps {
                    let p = center.polar(radius, start + sweep * (i as f32 / steps as f32));
                    if open {
                        pb.line_to(p.x, p.y);
                    } else {
                        pb.move_to(p.x, p.y);
                        open = true;
                    }
                }
            }
            PathEl::Close => {
                if open {
                    pb.close();
                    open = false;
                }
            }
        }
    }
    pb.finish()
}

// ── text ──────────────────────────────────────────────────────────────────

fn draw_text(pixmap: &mut sk::Pixmap, fonts: &FontSystem, cmd: &TextCmd) -> bool {
    let Some(font) = cmd.font else {
        return false;
    };
    let glyphs = fonts.rasterize(&cmd.text, font, cmd.size);
    if glyphs.is_empty() {
        return false;
    }

    let (r, g, b, a) = cmd.color.to_straight();
    let (pw, ph) = (pixmap.width() as i64, pixmap.height() as i64);
    let pixels = pixmap.pixels_mut();

    for glyph in &glyphs {
        let gx = (cmd.origin.x + glyph.x).round() as i64;
        let gy = (cmd.origin.y + glyph.y).round() as i64;
        for row in 0..glyph.height {
            let y = gy + row as i64;
            if !(0..ph).contains(&y) {
                continue;
            }
            for col in 0..glyph.width {
                let x = gx + col as i64;
                if !(0..pw).contains(&x) {
                    continue;
                }
                let cov = glyph.coverage[row * glyph.width + col] as f32 / 255.0;
                let sa = a * cov;
                if sa <= 0.0 {
                    continue;
                }
                let idx = (y * pw + x) as usize;
                let dst = pixels[idx];
                let blend = |s: f32, d: u8| (s * sa * 255.0 + d as f32 * (1.0 - sa)).round().clamp(0.0, 255.0) as u8;
                let out_a = (sa * 255.0 + dst.alpha() as f32 * (1.0 - sa)).round().clamp(0.0, 255.0) as u8;
                let out = sk::PremultipliedColorU8::from_rgba(
                    blend(r, dst.red()).min(out_a),
                    blend(g, dst.green()).min(out_a),
                    blend(b, dst.blue()).min(out_a),
                    out_a,
                );
                if let Some(px) = out {
                    pixels[idx] = px;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Stroke, ZIndex};

    fn pixel(pixmap: &sk::Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).expect("in bounds").demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    fn small() -> Rasterizer {
        Rasterizer::new(RasterConfig::default().viewport(Viewport::new(20.0, 20.0)).anti_alias(false))
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let mut r = Rasterizer::new(RasterConfig::default().viewport(Viewport::new(0.0, 10.0)));
        let err = r.render(&mut DrawList::new(), None).unwrap_err();
        assert_eq!(err, RasterError::InvalidViewport { width: 0.0, height: 10.0 });
    }

    #[test]
    fn clear_color_fills_background() {
        let mut r = Rasterizer::new(
            RasterConfig::default().viewport(Viewport::new(4.0, 4.0)).clear(Color::hex(0x336699)),
        );
        let pixmap = r.render(&mut DrawList::new(), None).unwrap();
        assert_eq!(pixel(&pixmap, 2, 2), [0x33, 0x66, 0x99, 255]);
    }

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::default(), Rect::new(0.0, 0.0, 20.0, 20.0), Color::hex(0xff0000));
        list.push_solid_rect(ZIndex::default(), Rect::new(5.0, 5.0, 10.0, 10.0), Color::hex(0x00ff00));
        let pixmap = small().render(&mut list, None).unwrap();
        assert_eq!(pixel(&pixmap, 1, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 10, 10), [0, 255, 0, 255]);
    }

    #[test]
    fn thin_anti_aliased_rect_straddling_pixels_is_filled() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::default(), Rect::new(439.1, 382.2, 1.8, 37.8), Color::hex(0x3a3a3a));
        let mut r = Rasterizer::new(RasterConfig::default().anti_alias(true));
        let pixmap = r.render(&mut list, None).unwrap();
        assert_eq!(r.skipped(), 0);
        assert!(pixel(&pixmap, 440, 400)[3] > 0);
        assert_eq!(pixel(&pixmap, 445, 400)[3], 0);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::default(), Rect::new(5.0, 5.0, 0.0, 4.0), Color::black());
        list.push_circle(ZIndex::default(), Vec2::new(5.0, 5.0), 0.0, Color::black().into());
        list.push_path(
            ZIndex::default(),
            vec![PathEl::MoveTo(Vec2::new(1.0, 1.0)), PathEl::LineTo(Vec2::new(8.0, 8.0))],
            PathStyle::Stroke(Stroke::new(0.0, Color::black())),
        );
        let mut r = small();
        r.render(&mut list, None).unwrap();
        assert_eq!(r.skipped(), 3);
    }

    #[test]
    fn filled_arc_path_covers_its_center() {
        let mut list = DrawList::new();
        list.push_path(
            ZIndex::default(),
            vec![
                PathEl::Arc { center: Vec2::new(10.0, 10.0), radius: 6.0, start: 0.0, end: TAU },
                PathEl::Close,
            ],
            PathStyle::Fill(Color::hex(0x0000ff).into()),
        );
        let pixmap = small().render(&mut list, None).unwrap();
        assert_eq!(pixel(&pixmap, 10, 10), [0, 0, 255, 255]);
        assert_eq!(pixel(&pixmap, 1, 1)[3], 0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut list = DrawList::new();
        list.push_ellipse(ZIndex::default(), Vec2::new(10.0, 10.0), Vec2::new(8.0, 4.0), Color::hex(0x224466).into());
        list.push_rounded_rect(
            ZIndex::default(),
            Rect::new(2.0, 2.0, 12.0, 9.0),
            CornerRadii::all(3.0),
            Color::hex_alpha(0xffcc00, 0.5).into(),
        );
        let a = small().render(&mut list, None).unwrap();
        let b = small().render(&mut list, None).unwrap();
        assert_eq!(a.data(), b.data());
    }
}
