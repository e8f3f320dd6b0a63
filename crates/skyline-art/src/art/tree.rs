use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::Surface;

/// Trunk and oval canopy with a ground shadow and a highlight.
///
/// `base` is the foot of the trunk. At `size = 1` the tree spans
/// `x - 11 ..= x + 14` and `y - 35 ..= y + 3`; everything scales with `size`.
pub fn draw_tree(s: &mut dyn Surface, base: Vec2, size: f32) {
    let u = size;
    let foliage = Color::hex(palette::FOLIAGE);

    s.ellipse(
        Color::hex_alpha(palette::SHADOW, 0.18),
        Vec2::new(base.x + 3.0 * u, base.y),
        Vec2::new(11.0 * u, 3.0 * u),
    );
    s.rect(Color::hex(palette::BARK), Rect::new(base.x - 2.0 * u, base.y - 14.0 * u, 4.0 * u, 14.0 * u));

    s.ellipse(foliage, Vec2::new(base.x, base.y - 22.0 * u), Vec2::new(11.0 * u, 13.0 * u));
    s.ellipse(foliage.shade(-0.18), Vec2::new(base.x + 4.0 * u, base.y - 17.0 * u), Vec2::new(7.0 * u, 7.0 * u));
    s.ellipse(
        Color::hex_alpha(palette::FOLIAGE_LIGHT, 0.6),
        Vec2::new(base.x - 4.0 * u, base.y - 27.0 * u),
        Vec2::new(4.0 * u, 5.0 * u),
    );
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    #[test]
    fn extent_scales_with_size() {
        let mut list = DrawList::new();
        draw_tree(&mut Painter::new(&mut list), Vec2::new(100.0, 100.0), 2.0);
        assert_eq!(list.bounds(), Some(Rect::from_min_max(Vec2::new(78.0, 30.0), Vec2::new(128.0, 106.0))));
    }

    #[test]
    fn zero_size_tree_is_degenerate_not_a_panic() {
        let mut list = DrawList::new();
        draw_tree(&mut Painter::new(&mut list), Vec2::new(5.0, 5.0), 0.0);
        assert_eq!(list.len(), 5);
    }
}
