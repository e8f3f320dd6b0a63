use std::f32::consts::{FRAC_PI_4, PI, TAU};

use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::rng::SeededRng;
use crate::surface::Surface;

/// Seed for the nave's stonework blocks.
pub const STONEWORK_SEED: u32 = 1_066;
const STONE_BLOCKS: usize = 70;

const STAINED_GLASS: [u32; 4] = [0xb3262f, 0x2849a8, 0xe0b43c, 0x2f8f5b];

/// Gothic cathedral: nave with buttresses and lancet windows, a central tower
/// with a rose window, and a spire topped by a cross.
///
/// `base` is the ground center. At scale 1 the building spans `x ± 44` and
/// `y - 158 ..= y`.
pub fn draw_cathedral(s: &mut dyn Surface, base: Vec2, scale: f32) {
    let u = scale;
    let at = |dx: f32, dy: f32| Vec2::new(base.x + dx * u, base.y + dy * u);
    let stone = Color::hex(palette::STONE);

    // Nave and buttresses.
    s.rect(stone, Rect::new(base.x - 40.0 * u, base.y - 60.0 * u, 80.0 * u, 60.0 * u));
    s.set_fill_color(stone.shade(-0.15));
    for dx in [-44.0, 40.0] {
        s.fill_rect(Rect::new(base.x + dx * u, base.y - 45.0 * u, 4.0 * u, 45.0 * u));
    }
    draw_stonework(s, base, u);

    s.polygon(Color::hex(palette::SLATE), &[at(-42.0, -60.0), at(0.0, -78.0), at(42.0, -60.0)]);

    for dx in [-30.0, -18.0, 12.0, 24.0] {
        lancet_window(s, Rect::new(base.x + dx * u, base.y - 50.0 * u, 6.0 * u, 20.0 * u), dx);
    }

    // Tower, spire and cross.
    s.rect(stone.shade(0.08), Rect::new(base.x - 12.0 * u, base.y - 104.0 * u, 24.0 * u, 44.0 * u));
    s.rect(stone.shade(-0.25), Rect::new(base.x - 13.0 * u, base.y - 105.0 * u, 26.0 * u, 2.0 * u));
    s.polygon(Color::hex(palette::SLATE).shade(-0.1), &[at(-14.0, -104.0), at(0.0, -150.0), at(14.0, -104.0)]);
    s.set_fill_color(Color::hex(palette::GOLD));
    s.fill_rect(Rect::new(base.x - 0.75 * u, base.y - 158.0 * u, 1.5 * u, 8.0 * u));
    s.fill_rect(Rect::new(base.x - 3.0 * u, base.y - 155.5 * u, 6.0 * u, 1.5 * u));

    rose_window(s, at(0.0, -86.0), 8.0 * u);

    // Portal.
    s.set_fill_color(Color::hex(palette::WOOD_DARK));
    s.begin_path();
    s.move_to(at(-7.0, 0.0));
    s.line_to(at(-7.0, -16.0));
    s.arc(at(0.0, -16.0), 7.0 * u, PI, TAU);
    s.line_to(at(7.0, 0.0));
    s.close_path();
    s.fill();
    // Moulding stops at the step so it never reaches below the ground line.
    s.begin_path();
    s.move_to(at(-7.0, -2.0));
    s.line_to(at(-7.0, -16.0));
    s.arc(at(0.0, -16.0), 7.0 * u, PI, TAU);
    s.line_to(at(7.0, -2.0));
    s.set_stroke(stone.shade(-0.35));
    s.set_line_width(1.2 * u);
    s.stroke();
    s.rect(stone.shade(-0.2), Rect::new(base.x - 12.0 * u, base.y - 2.0 * u, 24.0 * u, 2.0 * u));
}

/// Staggered block outlines across the nave wall.
fn draw_stonework(s: &mut dyn Surface, base: Vec2, u: f32) {
    let mut rng = SeededRng::new(STONEWORK_SEED);
    let mortar = Color::hex_alpha(palette::STONE_DARK, 0.45);
    let face = Color::hex_alpha(palette::WHITE, 0.18);
    for _ in 0..STONE_BLOCKS {
        let x = base.x + rng.range(-38.0, 33.0) * u;
        let y = base.y + rng.range(-58.0, -5.0) * u;
        let color = if rng.next_f32() < 0.7 { mortar } else { face };
        s.rect(color, Rect::new(x, y, 5.0 * u, 2.0 * u));
    }
}

/// Pointed-arch window glazed with two stained-glass colors.
fn lancet_window(s: &mut dyn Surface, r: Rect, tint_key: f32) {
    let i = (tint_key.abs() as usize / 6) % STAINED_GLASS.len();
    let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
    let peak = Vec2::new(x + w * 0.5, y);

    s.polygon(Color::hex(STAINED_GLASS[i]), &[
        Vec2::new(x, y + h),
        Vec2::new(x, y + w),
        peak,
        Vec2::new(x + w, y + w),
        Vec2::new(x + w, y + h),
    ]);
    s.set_fill_color(Color::hex(STAINED_GLASS[(i + 2) % STAINED_GLASS.len()]));
    s.fill_rounded_rect(Rect::new(x + w * 0.25, y + h * 0.45, w * 0.5, h * 0.3), CornerRadii::all(w * 0.25));
    s.line(Color::hex(palette::IRON), 0.6, Vec2::new(peak.x, y + w * 0.5), Vec2::new(peak.x, y + h));
}

/// Round window of eight stained-glass wedges with lead came.
fn rose_window(s: &mut dyn Surface, center: Vec2, radius: f32) {
    s.circle(Color::hex(palette::STONE_DARK), center, radius + radius * 0.15);

    for i in 0..8 {
        let a0 = i as f32 * FRAC_PI_4;
        s.set_fill_color(Color::hex(STAINED_GLASS[i % STAINED_GLASS.len()]));
        s.begin_path();
        s.move_to(center);
        s.arc(center, radius, a0, a0 + FRAC_PI_4);
        s.close_path();
        s.fill();
    }

    let lead = Color::hex(palette::IRON);
    for i in 0..4 {
        let a = i as f32 * FRAC_PI_4;
        s.line(lead, radius * 0.08, center.polar(radius, a), center.polar(radius, a + PI));
    }
    s.begin_path();
    s.arc(center, radius, 0.0, TAU);
    s.close_path();
    s.stroke();
    s.circle(Color::hex(palette::GOLD), center, radius * 0.25);
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    fn record(base: Vec2, scale: f32) -> DrawList {
        let mut list = DrawList::new();
        draw_cathedral(&mut Painter::new(&mut list), base, scale);
        list
    }

    #[test]
    fn extent_at_unit_scale() {
        let b = record(Vec2::new(150.0, 230.0), 1.0).bounds().unwrap();
        let extent = Rect::from_min_max(Vec2::new(106.0, 72.0), Vec2::new(194.0, 230.0));
        assert!(extent.contains_rect(b), "{b:?}");
        assert_eq!(b.min().y, 72.0);
        assert_eq!(b.max().y, 230.0);
    }

    #[test]
    fn extent_scales_about_the_ground_center() {
        let b = record(Vec2::new(300.0, 400.0), 0.5).bounds().unwrap();
        let extent = Rect::from_min_max(Vec2::new(278.0, 321.0), Vec2::new(322.0, 400.0));
        assert!(extent.contains_rect(b), "{b:?}");
    }

    #[test]
    fn stonework_is_stable_between_paints() {
        let base = Vec2::new(150.0, 230.0);
        assert_eq!(record(base, 1.0).items(), record(base, 1.0).items());
    }
}
