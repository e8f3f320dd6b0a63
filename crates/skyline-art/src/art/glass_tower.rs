use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::{Color, LinearGradient, Paint};

use crate::palette;
use crate::surface::Surface;

const BODY_WIDTH: f32 = 40.0;
const BODY_HEIGHT: f32 = 150.0;
const PANE_COLS: u32 = 5;
const PANE_ROWS: u32 = 18;

/// Curtain-wall glass color of a tower.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlassTint {
    Blue,
    Teal,
    Amber,
}

impl GlassTint {
    /// Light and dark ends of the facade gradient.
    fn ramp(self) -> (u32, u32) {
        match self {
            GlassTint::Blue => (0x8fb8de, 0x2c4f7a),
            GlassTint::Teal => (0x8fd3c8, 0x2a6b66),
            GlassTint::Amber => (0xe6c58a, 0x7a5a2c),
        }
    }
}

/// Modern glass skyscraper with a pane grid, a diagonal reflection, a crown
/// and an antenna with a beacon.
///
/// `base` is the ground center. At scale 1 the tower spans `x ± 20` and
/// `y - 182.5 ..= y`.
pub fn draw_glass_tower(s: &mut dyn Surface, base: Vec2, scale: f32, tint: GlassTint) {
    let u = scale;
    let (light, dark) = tint.ramp();
    let body = Rect::new(base.x - BODY_WIDTH * 0.5 * u, base.y - BODY_HEIGHT * u, BODY_WIDTH * u, BODY_HEIGHT * u);

    s.set_fill(Paint::LinearGradient(LinearGradient::between(
        body.origin,
        Vec2::new(body.max().x, body.origin.y),
        Color::hex(light),
        Color::hex(dark),
    )));
    s.fill_rect(body);

    // Pane grid: mullions and transoms.
    let mullion = Color::hex_alpha(palette::IRON, 0.35);
    let pane_w = body.size.x / PANE_COLS as f32;
    let pane_h = body.size.y / PANE_ROWS as f32;
    s.set_fill_color(mullion);
    for col in 1..PANE_COLS {
        s.fill_rect(Rect::new(body.origin.x + col as f32 * pane_w - 0.25 * u, body.origin.y, 0.5 * u, body.size.y));
    }
    for row in 1..PANE_ROWS {
        s.fill_rect(Rect::new(body.origin.x, body.origin.y + row as f32 * pane_h - 0.25 * u, body.size.x, 0.5 * u));
    }

    // Sky reflection across the upper facade.
    s.polygon(Color::hex_alpha(palette::WHITE, 0.22), &[
        Vec2::new(body.origin.x, body.origin.y + 20.0 * u),
        Vec2::new(body.origin.x + 18.0 * u, body.origin.y),
        Vec2::new(body.origin.x + 30.0 * u, body.origin.y),
        Vec2::new(body.origin.x, body.origin.y + 45.0 * u),
    ]);

    let crown = Color::hex(dark).shade(-0.3);
    s.rect(crown, Rect::new(base.x - 16.0 * u, base.y - 158.0 * u, 32.0 * u, 8.0 * u));
    s.rect(Color::hex(palette::STEEL), Rect::new(base.x - u, base.y - 180.0 * u, 2.0 * u, 22.0 * u));
    s.circle(Color::hex(palette::SIGNAL_RED), Vec2::new(base.x, base.y - 181.0 * u), 1.5 * u);

    // Entrance and canopy.
    s.rect(Color::hex(palette::IRON), Rect::new(base.x - 5.0 * u, base.y - 10.0 * u, 10.0 * u, 10.0 * u));
    s.rect(crown, Rect::new(base.x - 8.0 * u, base.y - 12.0 * u, 16.0 * u, 2.0 * u));
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::painter::Painter;

    fn record(tint: GlassTint) -> DrawList {
        let mut list = DrawList::new();
        draw_glass_tower(&mut Painter::new(&mut list), Vec2::new(470.0, 225.0), 1.0, tint);
        list
    }

    #[test]
    fn body_is_filled_with_a_gradient() {
        let list = record(GlassTint::Blue);
        let DrawCmd::Rect(body) = &list.items()[0].cmd else {
            panic!("expected the body rect first");
        };
        assert!(matches!(body.paint, Paint::LinearGradient(_)));
    }

    #[test]
    fn extent_at_unit_scale() {
        let b = record(GlassTint::Teal).bounds().unwrap();
        assert_eq!(b.min(), Vec2::new(450.0, 225.0 - 182.5));
        assert_eq!(b.max(), Vec2::new(490.0, 225.0));
    }

    #[test]
    fn tints_differ_only_in_color() {
        let (a, b) = (record(GlassTint::Blue), record(GlassTint::Amber));
        assert_eq!(a.len(), b.len());
        assert_ne!(a.items(), b.items());
    }
}
