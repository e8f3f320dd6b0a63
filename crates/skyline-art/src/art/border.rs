use skyline_engine::coords::Rect;
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::Surface;

/// Small flat-roofed box used to frame the map edges.
///
/// `body` is the wall; the roof slab overhangs it by 2 px each side and sits 3 px
/// above it. Windows fill the wall in a 8 × 8 px grid when there is room.
pub fn draw_border_building(s: &mut dyn Surface, body: Rect, color: Color) {
    let body = body.normalized();
    let (x, y, w, h) = (body.origin.x, body.origin.y, body.size.x, body.size.y);

    s.rect(color, body);
    s.rect(color.shade(-0.35), Rect::new(x - 2.0, y - 3.0, w + 4.0, 3.0));
    // Shadow line under the roof.
    s.rect(color.shade(-0.2), Rect::new(x, y, w, 1.5));

    let cols = ((w - 4.0) / 8.0).floor().max(0.0) as usize;
    let rows = ((h - 6.0) / 8.0).floor().max(0.0) as usize;
    if cols == 0 || rows == 0 {
        return;
    }
    let glass = Color::hex(palette::GLASS);
    let lit = Color::hex(palette::GLASS_LIT);
    let x0 = x + (w - cols as f32 * 8.0) * 0.5 + 2.0;
    for row in 0..rows {
        for col in 0..cols {
            // Fixed pattern of lit windows keeps the frame static.
            let c = if (row * 3 + col * 5) % 7 == 0 { lit } else { glass };
            s.rect(c, Rect::new(x0 + col as f32 * 8.0, y + 4.0 + row as f32 * 8.0, 4.0, 5.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    #[test]
    fn window_grid_matches_wall_size() {
        let mut list = DrawList::new();
        draw_border_building(&mut Painter::new(&mut list), Rect::new(10.0, 10.0, 52.0, 22.0), Color::hex(0xb5653a));
        // wall + roof + shadow line + 6 columns × 2 rows
        assert_eq!(list.len(), 3 + 12);
    }

    #[test]
    fn tiny_building_has_no_windows() {
        let mut list = DrawList::new();
        draw_border_building(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 6.0, 6.0), Color::black());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn roof_overhang_sets_the_extent() {
        let mut list = DrawList::new();
        draw_border_building(&mut Painter::new(&mut list), Rect::new(10.0, 10.0, 40.0, 20.0), Color::black());
        assert_eq!(list.bounds(), Some(Rect::new(8.0, 7.0, 44.0, 23.0)));
    }
}
