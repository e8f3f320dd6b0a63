use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::Surface;

/// Chimney stacks as `(center offset, width, height)` in unscaled pixels.
const STACKS: [(f32, f32, f32); 3] = [(-28.0, 8.0, 80.0), (-8.0, 7.0, 95.0), (22.0, 9.0, 70.0)];

const HALL_HALF_WIDTH: f32 = 45.0;
const HALL_HEIGHT: f32 = 35.0;
const TOOTH_COUNT: usize = 4;

/// Factory hall with a sawtooth roof, three banded chimneys trailing static
/// smoke, and a gas holder to the right.
///
/// `base` is the ground center of the hall. At scale 1 the group spans
/// `x - 45 ..= x + 66` and `y - 119 ..= y`.
pub fn draw_industrial_towers(s: &mut dyn Surface, base: Vec2, scale: f32) {
    let u = scale;
    let brick = Color::hex(0x8a4b38);
    let hall_top = base.y - HALL_HEIGHT * u;

    for (dx, w, h) in STACKS {
        draw_stack(s, Vec2::new(base.x + dx * u, base.y), w * u, h * u);
    }

    s.rect(brick, Rect::new(base.x - HALL_HALF_WIDTH * u, hall_top, 2.0 * HALL_HALF_WIDTH * u, HALL_HEIGHT * u));

    // Sawtooth roof: glazed vertical face on the left of each tooth.
    let tooth = 2.0 * HALL_HALF_WIDTH * u / TOOTH_COUNT as f32;
    for i in 0..TOOTH_COUNT {
        let x0 = base.x - HALL_HALF_WIDTH * u + i as f32 * tooth;
        s.polygon(Color::hex(palette::SLATE), &[
            Vec2::new(x0, hall_top),
            Vec2::new(x0, hall_top - 12.0 * u),
            Vec2::new(x0 + tooth, hall_top),
        ]);
        s.rect(Color::hex_alpha(palette::GLASS, 0.85), Rect::new(x0 + 0.5 * u, hall_top - 11.0 * u, 2.0 * u, 10.0 * u));
    }

    s.set_fill_color(Color::hex(palette::GLASS));
    for i in 0..6 {
        let x = base.x + (-40.0 + i as f32 * 14.0) * u;
        s.fill_rect(Rect::new(x, base.y - 26.0 * u, 8.0 * u, 10.0 * u));
    }
    s.rect(Color::hex(palette::WOOD_DARK), Rect::new(base.x - 6.0 * u, base.y - 14.0 * u, 12.0 * u, 14.0 * u));

    draw_gas_holder(s, Vec2::new(base.x + 57.0 * u, base.y), u);
}

fn draw_stack(s: &mut dyn Surface, foot: Vec2, w: f32, h: f32) {
    let top = foot.y - h;
    let brick = Color::hex(0x9c5440);

    s.rect(brick, Rect::new(foot.x - w * 0.5, top, w, h));
    s.set_fill_color(Color::hex(palette::WHITE));
    for band in [4.0, 10.0] {
        s.fill_rect(Rect::new(foot.x - w * 0.5, top + band * w / 8.0, w, 3.0 * w / 8.0));
    }
    s.rect(brick.shade(-0.35), Rect::new(foot.x - w * 0.5 - w / 8.0, top, w + w / 4.0, w / 4.0));

    // Smoke drifts up and to the right, growing as it rises.
    let u = w / 8.0;
    for k in 0..3 {
        let k = k as f32;
        let center = Vec2::new(foot.x + k * 4.0 * u, top - 6.0 * u - k * 7.0 * u);
        s.circle(Color::hex_alpha(0xbfbfbf, 0.35 - k * 0.08), center, (4.0 + k * 1.5) * u);
    }
}

fn draw_gas_holder(s: &mut dyn Surface, foot: Vec2, u: f32) {
    let steel = Color::hex(palette::STEEL);
    let top = foot.y - 28.0 * u;

    s.rect(steel, Rect::new(foot.x - 9.0 * u, top, 18.0 * u, 28.0 * u));
    s.ellipse(steel.shade(0.2), Vec2::new(foot.x, top), Vec2::new(9.0 * u, 3.0 * u));
    // Rings are inset so their stroke stays on the shell.
    let ring_w = 0.8 * u;
    let half = 9.0 * u - ring_w;
    for ring in 1..4 {
        let y = top + ring as f32 * 7.0 * u;
        s.line(steel.shade(-0.35), ring_w, Vec2::new(foot.x - half, y), Vec2::new(foot.x + half, y));
    }
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    #[test]
    fn extent_at_unit_scale() {
        let mut list = DrawList::new();
        draw_industrial_towers(&mut Painter::new(&mut list), Vec2::new(780.0, 240.0), 1.0);
        let b = list.bounds().unwrap();
        let extent = Rect::from_min_max(Vec2::new(735.0, 121.0), Vec2::new(846.0, 240.0));
        assert!(extent.contains_rect(b), "{b:?}");
        assert_eq!(b.min().x, 735.0);
        assert_eq!(b.max().x, 846.0);
    }

    #[test]
    fn gas_holder_rings_stay_on_the_shell() {
        let mut list = DrawList::new();
        draw_gas_holder(&mut Painter::new(&mut list), Vec2::new(100.0, 100.0), 2.5);
        let b = list.bounds().unwrap();
        assert_eq!(b.min().x, 77.5);
        assert_eq!(b.max().x, 122.5);
    }
}
