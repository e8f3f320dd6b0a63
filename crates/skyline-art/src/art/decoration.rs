use std::f32::consts::TAU;

use skyline_engine::coords::Vec2;
use skyline_engine::paint::Color;

use crate::palette;
use crate::rng::SeededRng;
use crate::surface::Surface;

/// Farthest a patch mark is placed from the patch center.
pub const PATCH_RADIUS: f32 = 14.0;
const MIN_MARKS: usize = 5;
const MAX_MARKS: usize = 8;

/// Salt separating small-element scatter from patch scatter at the same point.
const SMALL_ELEMENT_SALT: u32 = 1;
const SMALL_ELEMENT_SPREAD: f32 = 10.0;

/// Kind of mark scattered in a ground patch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PatchMark {
    Tuft,
    Pebble,
    /// Flower head in the given `0xRRGGBB` color.
    Flower(u32),
}

/// One scattered mark, relative to the patch center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PatchPoint {
    pub offset: Vec2,
    pub size: f32,
    pub mark: PatchMark,
}

/// Marks of the patch centered at `center`.
///
/// The generator is seeded from `center`, so a patch drawn twice at the same
/// position scatters identically.
pub fn patch_points(center: Vec2) -> Vec<PatchPoint> {
    let mut rng = SeededRng::from_point(center);
    let count = MIN_MARKS + rng.index(MAX_MARKS - MIN_MARKS + 1);

    (0..count)
        .map(|_| {
            let angle = rng.range(0.0, TAU);
            let distance = rng.range(2.0, PATCH_RADIUS);
            let size = rng.range(1.0, 2.2);
            let mark = match rng.index(3) {
                0 => PatchMark::Tuft,
                1 => PatchMark::Pebble,
                _ => PatchMark::Flower(palette::FLOWERS[rng.index(palette::FLOWERS.len())]),
            };
            PatchPoint { offset: Vec2::zero().polar(distance, angle), size, mark }
        })
        .collect()
}

/// Ground patch: a soft oval with tufts, pebbles and flowers scattered on it.
///
/// Extent: `center ± 21` on both axes.
pub fn draw_decoration_patch(s: &mut dyn Surface, center: Vec2) {
    s.ellipse(Color::hex_alpha(palette::FOLIAGE, 0.35), center, Vec2::new(16.0, 8.0));

    for point in patch_points(center) {
        let p = center + point.offset;
        let u = point.size;
        match point.mark {
            PatchMark::Tuft => {
                let grass = Color::hex(palette::FOLIAGE).shade(-0.1);
                for dx in [-1.0, 0.0, 1.0] {
                    s.line(grass, 0.6, Vec2::new(p.x + dx * u, p.y), Vec2::new(p.x + dx * u * 1.5, p.y - 3.0 * u));
                }
            }
            PatchMark::Pebble => {
                s.ellipse(Color::hex(palette::STONE), p, Vec2::new(1.2 * u, 0.8 * u));
            }
            PatchMark::Flower(hex) => {
                s.set_fill_color(Color::hex(hex));
                for k in 0..4 {
                    let petal = p.polar(0.7 * u, k as f32 * TAU / 4.0);
                    s.fill_circle(petal, 0.6 * u);
                }
                s.circle(Color::hex(palette::GOLD), p, 0.4 * u);
            }
        }
    }
}

/// `count` tiny dots of gravel and litter around `center`, within ±10 px.
pub fn draw_small_elements(s: &mut dyn Surface, center: Vec2, count: u32) {
    let mut rng = SeededRng::from_point_salted(center, SMALL_ELEMENT_SALT);
    let colors = [palette::SPECKLE_DARK, palette::STONE, palette::FLOWERS[1]];

    for _ in 0..count {
        let offset = Vec2::new(
            rng.range(-SMALL_ELEMENT_SPREAD, SMALL_ELEMENT_SPREAD),
            rng.range(-SMALL_ELEMENT_SPREAD, SMALL_ELEMENT_SPREAD),
        );
        let radius = rng.range(0.6, 1.6);
        let color = colors[rng.index(colors.len())];
        s.circle(Color::hex(color), center + offset, radius);
    }
}

#[cfg(test)]
mod tests {
    use skyline_engine::coords::Rect;
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    // ── scatter ──

    #[test]
    fn same_point_scatters_identically() {
        let c = Vec2::new(170.0, 440.0);
        assert_eq!(patch_points(c), patch_points(c));
    }

    #[test]
    fn distinct_points_scatter_differently() {
        assert_ne!(patch_points(Vec2::new(60.0, 70.0)), patch_points(Vec2::new(300.0, 60.0)));
    }

    #[test]
    fn sub_pixel_jitter_rounds_to_the_same_patch() {
        assert_eq!(patch_points(Vec2::new(60.2, 69.9)), patch_points(Vec2::new(60.0, 70.0)));
    }

    #[test]
    fn marks_stay_within_the_patch_radius() {
        for c in [Vec2::new(0.0, 0.0), Vec2::new(450.0, 560.0), Vec2::new(870.0, 90.0)] {
            let points = patch_points(c);
            assert!((MIN_MARKS..=MAX_MARKS).contains(&points.len()));
            for p in points {
                let d = (p.offset.x * p.offset.x + p.offset.y * p.offset.y).sqrt();
                assert!(d <= PATCH_RADIUS + 1e-3, "{d}");
                assert!((1.0..2.2).contains(&p.size));
            }
        }
    }

    // ── drawing ──

    #[test]
    fn patch_extent_is_bounded() {
        let c = Vec2::new(800.0, 400.0);
        let mut list = DrawList::new();
        draw_decoration_patch(&mut Painter::new(&mut list), c);
        let b = list.bounds().unwrap();
        assert!(Rect::around(c, Vec2::splat(21.0)).contains_rect(b), "{b:?}");
    }

    #[test]
    fn small_elements_draw_one_dot_each_near_the_center() {
        let c = Vec2::new(330.0, 250.0);
        let mut list = DrawList::new();
        draw_small_elements(&mut Painter::new(&mut list), c, 6);
        assert_eq!(list.len(), 6);
        assert!(Rect::around(c, Vec2::splat(11.6)).contains_rect(list.bounds().unwrap()));
    }

    #[test]
    fn small_elements_do_not_mirror_the_patch_at_the_same_point() {
        let c = Vec2::new(100.0, 500.0);
        let mut patch = SeededRng::from_point(c);
        let mut small = SeededRng::from_point_salted(c, SMALL_ELEMENT_SALT);
        assert_ne!(patch.next_f32(), small.next_f32());
    }
}
