//! Street furniture: flags, traffic lights, road signs and crosswalks.
//!
//! Every piece stands on `base` (bottom center) and scales with `scale`.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::Surface;

// ── flag ──────────────────────────────────────────────────────────────────

/// Stripe colors of a flag, top to bottom.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FlagStyle {
    Civic,
    Harbour,
    Festival,
}

impl FlagStyle {
    fn stripes(self) -> [u32; 3] {
        match self {
            FlagStyle::Civic => [0xc8102e, 0xf4f4f0, 0xc8102e],
            FlagStyle::Harbour => [0x1d3f8f, 0xf4f4f0, 0x1d3f8f],
            FlagStyle::Festival => [0xf3c843, 0x3cb85a, 0xe0475b],
        }
    }
}

/// Pole with a three-stripe pennant flying to the right.
///
/// Extent at scale 1: `x - 1.8 ..= x + 23.5`, `y - 44.8 ..= y`.
pub fn draw_flag(s: &mut dyn Surface, base: Vec2, scale: f32, style: FlagStyle) {
    let u = scale;
    let top = base.y - 41.0 * u;

    s.rect(Color::hex(palette::STEEL), Rect::new(base.x - u, base.y - 42.0 * u, 2.0 * u, 42.0 * u));
    s.circle(Color::hex(palette::GOLD), Vec2::new(base.x, base.y - 43.0 * u), 1.8 * u);

    let (x0, x1) = (base.x + u, base.x + 23.0 * u);
    for (i, color) in style.stripes().into_iter().enumerate() {
        let y0 = top + i as f32 * 5.0 * u;
        let y1 = y0 + 5.0 * u;
        // Free edge droops slightly.
        s.polygon(Color::hex(color), &[
            Vec2::new(x0, y0),
            Vec2::new(x1, y0 + 1.5 * u),
            Vec2::new(x1, y1 + 1.5 * u),
            Vec2::new(x0, y1),
        ]);
    }

    s.set_stroke(Color::hex_alpha(palette::SHADOW, 0.5));
    s.set_line_width(0.5 * u);
    s.begin_path();
    s.move_to(Vec2::new(x0, top));
    s.line_to(Vec2::new(x1, top + 1.5 * u));
    s.line_to(Vec2::new(x1, top + 16.5 * u));
    s.line_to(Vec2::new(x0, top + 15.0 * u));
    s.close_path();
    s.stroke();
}

// ── traffic light ─────────────────────────────────────────────────────────

/// Which lamp of a traffic light is lit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Signal {
    Red,
    Amber,
    Green,
}

/// Three-lamp signal head on a pole.
///
/// Extent at scale 1: `x ± 5`, `y - 56 ..= y`.
pub fn draw_traffic_light(s: &mut dyn Surface, base: Vec2, scale: f32, lit: Signal) {
    let u = scale;
    let dark = Color::hex(palette::IRON);

    s.rect(dark, Rect::new(base.x - 1.5 * u, base.y - 30.0 * u, 3.0 * u, 30.0 * u));
    s.rect(dark.shade(0.2), Rect::new(base.x - 4.0 * u, base.y - 2.0 * u, 8.0 * u, 2.0 * u));

    s.set_fill_color(dark.shade(-0.3));
    s.fill_rounded_rect(Rect::new(base.x - 5.0 * u, base.y - 56.0 * u, 10.0 * u, 27.0 * u), CornerRadii::all(2.0 * u));

    let lamps = [
        (Signal::Red, palette::SIGNAL_RED, 50.0),
        (Signal::Amber, palette::SIGNAL_AMBER, 42.5),
        (Signal::Green, palette::SIGNAL_GREEN, 35.0),
    ];
    for (signal, hex, dy) in lamps {
        let center = Vec2::new(base.x, base.y - dy * u);
        if signal == lit {
            s.circle(Color::hex_alpha(hex, 0.3), center, 4.5 * u);
            s.circle(Color::hex(hex), center, 3.0 * u);
            s.circle(Color::hex_alpha(palette::WHITE, 0.6), center + Vec2::new(-u, -u), 0.8 * u);
        } else {
            s.circle(Color::hex(hex).shade(-0.65), center, 3.0 * u);
        }
    }
}

// ── road sign ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoadSignKind {
    Stop,
    Yield,
    OneWay,
}

/// Sign plate on a post.
///
/// Extent at scale 1: `x ± 10`, `y - 40 ..= y`.
pub fn draw_road_sign(s: &mut dyn Surface, base: Vec2, scale: f32, kind: RoadSignKind) {
    let u = scale;
    s.rect(Color::hex(palette::STEEL), Rect::new(base.x - u, base.y - 26.0 * u, 2.0 * u, 26.0 * u));

    let red = Color::hex(palette::SIGNAL_RED);
    let white = Color::hex(palette::WHITE);
    match kind {
        RoadSignKind::Stop => {
            let center = Vec2::new(base.x, base.y - 32.0 * u);
            let octagon = |r: f32| -> Vec<Vec2> {
                (0..8).map(|i| center.polar(r, FRAC_PI_8 + i as f32 * FRAC_PI_4)).collect()
            };
            s.polygon(white, &octagon(8.0 * u));
            s.polygon(red, &octagon(7.0 * u));
            s.rect(white, Rect::new(base.x - 4.5 * u, base.y - 33.0 * u, 9.0 * u, 2.0 * u));
        }
        RoadSignKind::Yield => {
            s.polygon(red, &[
                Vec2::new(base.x - 9.0 * u, base.y - 40.0 * u),
                Vec2::new(base.x + 9.0 * u, base.y - 40.0 * u),
                Vec2::new(base.x, base.y - 25.0 * u),
            ]);
            s.polygon(white, &[
                Vec2::new(base.x - 5.5 * u, base.y - 38.0 * u),
                Vec2::new(base.x + 5.5 * u, base.y - 38.0 * u),
                Vec2::new(base.x, base.y - 29.0 * u),
            ]);
        }
        RoadSignKind::OneWay => {
            s.rect(Color::hex(palette::IRON), Rect::new(base.x - 10.0 * u, base.y - 36.0 * u, 20.0 * u, 8.0 * u));
            let mid = base.y - 32.0 * u;
            s.polygon(white, &[
                Vec2::new(base.x - 8.0 * u, mid - 1.0 * u),
                Vec2::new(base.x + 3.0 * u, mid - 1.0 * u),
                Vec2::new(base.x + 3.0 * u, mid - 3.0 * u),
                Vec2::new(base.x + 8.0 * u, mid),
                Vec2::new(base.x + 3.0 * u, mid + 3.0 * u),
                Vec2::new(base.x + 3.0 * u, mid + 1.0 * u),
                Vec2::new(base.x - 8.0 * u, mid + 1.0 * u),
            ]);
        }
    }
}

// ── crosswalk ─────────────────────────────────────────────────────────────

/// Direction the crossing runs across the road.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Stripes side by side along +X, each `length` tall.
    Horizontal,
    /// Stripes stacked along +Y, each `length` wide.
    Vertical,
}

pub const STRIPE_WIDTH: f32 = 5.0;
pub const STRIPE_PITCH: f32 = 8.0;

/// Zebra stripes starting at `origin` (top-left).
pub fn draw_crosswalk(s: &mut dyn Surface, origin: Vec2, length: f32, stripes: u32, orientation: Orientation) {
    s.set_fill_color(Color::hex_alpha(palette::WHITE, 0.85));
    for i in 0..stripes {
        let along = i as f32 * STRIPE_PITCH;
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(origin.x + along, origin.y, STRIPE_WIDTH, length),
            Orientation::Vertical => Rect::new(origin.x, origin.y + along, length, STRIPE_WIDTH),
        };
        s.fill_rect(rect);
    }
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::painter::Painter;

    fn record(f: impl FnOnce(&mut dyn Surface)) -> DrawList {
        let mut list = DrawList::new();
        f(&mut Painter::new(&mut list));
        list
    }

    #[test]
    fn crosswalk_draws_one_rect_per_stripe() {
        let list = record(|s| draw_crosswalk(s, Vec2::new(10.0, 20.0), 18.0, 5, Orientation::Horizontal));
        assert_eq!(list.len(), 5);
        assert_eq!(list.bounds(), Some(Rect::new(10.0, 20.0, 37.0, 18.0)));
    }

    #[test]
    fn vertical_crosswalk_stacks_downwards() {
        let list = record(|s| draw_crosswalk(s, Vec2::new(0.0, 0.0), 22.0, 3, Orientation::Vertical));
        let last = list.items().last().unwrap().cmd.bounds().unwrap();
        assert_eq!(last, Rect::new(0.0, 16.0, 22.0, 5.0));
    }

    #[test]
    fn only_the_lit_lamp_glows() {
        let list = record(|s| draw_traffic_light(s, Vec2::new(50.0, 100.0), 1.0, Signal::Green));
        let circles = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Circle(_))).count();
        // two dark lamps + glow, lamp and glint of the lit one
        assert_eq!(circles, 5);
    }

    #[test]
    fn furniture_stays_inside_documented_extents() {
        let base = Vec2::new(100.0, 100.0);
        let cases: [(Rect, DrawList); 5] = [
            (Rect::new(90.0, 60.0, 20.0, 40.0), record(|s| draw_road_sign(s, base, 1.0, RoadSignKind::Stop))),
            (Rect::new(90.0, 60.0, 20.0, 40.0), record(|s| draw_road_sign(s, base, 1.0, RoadSignKind::Yield))),
            (Rect::new(90.0, 60.0, 20.0, 40.0), record(|s| draw_road_sign(s, base, 1.0, RoadSignKind::OneWay))),
            (Rect::new(95.0, 44.0, 10.0, 56.0), record(|s| draw_traffic_light(s, base, 1.0, Signal::Red))),
            (Rect::new(98.0, 55.0, 26.0, 45.0), record(|s| draw_flag(s, base, 1.0, FlagStyle::Civic))),
        ];
        for (extent, list) in cases {
            let b = list.bounds().unwrap();
            assert!(extent.contains_rect(b), "{b:?} escapes {extent:?}");
        }
    }
}
