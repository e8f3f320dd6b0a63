use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::rng::SeededRng;
use crate::surface::Surface;

/// Seed for the ground speckles. Constant, so every paint is identical.
pub const TEXTURE_SEED: u32 = 12_345;

/// Number of speckle dots scattered over the area.
pub const SPECKLE_COUNT: usize = 600;

/// Gap kept between a dot's edge and the area boundary.
const EDGE_MARGIN: f32 = 0.5;

/// Fills `area` with the ground color and scatters speckle dots over it.
///
/// Dots stay fully inside `area`.
pub fn draw_texture(s: &mut dyn Surface, area: Rect) {
    let area = area.normalized();
    s.rect(Color::hex(palette::GROUND), area);

    let dark = Color::hex_alpha(palette::SPECKLE_DARK, 0.28);
    let light = Color::hex_alpha(palette::SPECKLE_LIGHT, 0.22);

    let mut rng = SeededRng::new(TEXTURE_SEED);
    for _ in 0..SPECKLE_COUNT {
        let r = rng.range(0.4, 1.4);
        let inset = r + EDGE_MARGIN;
        let x = rng.range(area.min().x + inset, area.max().x - inset);
        let y = rng.range(area.min().y + inset, area.max().y - inset);
        let color = if rng.next_f32() < 0.55 { dark } else { light };
        s.circle(color, Vec2::new(x, y), r);
    }
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::painter::Painter;

    fn record(area: Rect) -> DrawList {
        let mut list = DrawList::new();
        draw_texture(&mut Painter::new(&mut list), area);
        list
    }

    #[test]
    fn base_fill_plus_one_dot_per_speckle() {
        let list = record(Rect::new(0.0, 0.0, 900.0, 600.0));
        assert_eq!(list.len(), SPECKLE_COUNT + 1);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Rect(_)));
    }

    #[test]
    fn repeated_paints_are_identical() {
        let area = Rect::new(0.0, 0.0, 900.0, 600.0);
        assert_eq!(record(area).items(), record(area).items());
    }

    #[test]
    fn dots_stay_inside_the_area() {
        let area = Rect::new(20.0, 30.0, 200.0, 100.0);
        let list = record(area);
        for item in list.items() {
            let b = item.cmd.bounds().expect("every texture shape has extent");
            assert!(area.contains_rect(b), "{b:?} escapes {area:?}");
        }
    }
}
