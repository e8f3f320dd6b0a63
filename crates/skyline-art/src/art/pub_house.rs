use std::f32::consts::PI;

use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::{Surface, TextAlign};

pub const PUB_WIDTH: f32 = 130.0;
pub const PUB_HEIGHT: f32 = 110.0;

/// Minimum width of the name board.
pub const MIN_SIGN_WIDTH: f32 = 85.0;
const SIGN_PADDING: f32 = 20.0;
const SIGN_TEXT_SIZE: f32 = 9.0;

const CREAM: u32 = 0xeee3c4;
const PUB_GREEN: u32 = 0x24503a;

/// Width of the name board for a name measuring `text_width`.
#[inline]
pub fn pub_sign_width(text_width: f32) -> f32 {
    (text_width + SIGN_PADDING).max(MIN_SIGN_WIDTH)
}

/// Two-story corner pub: rendered upper floor with flower boxes, a green
/// painted ground floor with the name board, an arched door and two lanterns.
///
/// `origin` is the top-left of the walls. The roof overhangs 4 px either side
/// and the chimney rises 9 px above `origin.y`.
pub fn draw_pub(s: &mut dyn Surface, origin: Vec2, name: &str) {
    let (ox, oy) = (origin.x, origin.y);
    let at = |dx: f32, dy: f32| Vec2::new(ox + dx, oy + dy);
    let green = Color::hex(PUB_GREEN);

    // Chimney behind the roof.
    s.rect(Color::hex(palette::FACADES[1]), Rect::new(ox + 96.0, oy - 7.0, 8.0, 15.0));
    s.rect(Color::hex(palette::STONE_DARK), Rect::new(ox + 95.0, oy - 9.0, 10.0, 2.0));
    s.polygon(Color::hex(palette::SLATE), &[at(-4.0, 24.0), at(20.0, 4.0), at(110.0, 4.0), at(134.0, 24.0)]);

    s.rect(Color::hex(CREAM), Rect::new(ox, oy + 24.0, PUB_WIDTH, 40.0));
    s.rect(green, Rect::new(ox, oy + 64.0, PUB_WIDTH, PUB_HEIGHT - 64.0));
    s.rect(green.shade(-0.35), Rect::new(ox - 1.0, oy + 62.0, PUB_WIDTH + 2.0, 2.0));

    for dx in [12.0, 55.0, 98.0] {
        sash_window(s, Rect::new(ox + dx, oy + 32.0, 20.0, 22.0));
        flower_box(s, Rect::new(ox + dx - 1.0, oy + 55.0, 22.0, 3.0));
    }

    name_board(s, at(65.0, 67.0), name);
    door(s, origin);

    for dx in [10.0, 84.0] {
        bay_window(s, Rect::new(ox + dx, oy + 84.0, 36.0, 20.0));
    }
    for dx in [48.0, 82.0] {
        lantern(s, at(dx, 88.0));
    }

    s.rect(Color::hex(palette::STONE), Rect::new(ox + 52.0, oy + 108.0, 26.0, 2.0));
}

/// Gilt-edged board centered on `top_center`, sized to the measured name.
fn name_board(s: &mut dyn Surface, top_center: Vec2, name: &str) {
    let width = pub_sign_width(s.measure_text(name, SIGN_TEXT_SIZE));
    let board = Rect::new(top_center.x - width * 0.5, top_center.y, width, 14.0);

    s.set_fill_color(Color::hex(palette::GOLD));
    s.fill_rounded_rect(board, CornerRadii::all(2.0));
    s.set_fill_color(Color::hex(PUB_GREEN).shade(-0.5));
    s.fill_rounded_rect(board.inflate(-1.0), CornerRadii::all(1.5));

    s.set_fill_color(Color::hex(palette::GOLD));
    s.fill_text(name, Vec2::new(top_center.x, top_center.y + 2.0), SIGN_TEXT_SIZE, TextAlign::Center);
}

fn sash_window(s: &mut dyn Surface, r: Rect) {
    s.rect(Color::hex(palette::GLASS), r);
    let frame = Color::hex(palette::WINDOW_FRAME);
    s.set_stroke(frame);
    s.set_line_width(1.5);
    s.stroke_rect(r);
    let mid = r.center();
    s.line(frame, 1.0, Vec2::new(r.origin.x, mid.y), Vec2::new(r.max().x, mid.y));
    s.line(frame, 1.0, Vec2::new(mid.x, r.origin.y), Vec2::new(mid.x, r.max().y));
}

fn flower_box(s: &mut dyn Surface, r: Rect) {
    s.rect(Color::hex(palette::WOOD), r);
    for (i, hex) in palette::FLOWERS.iter().enumerate() {
        let x = r.origin.x + 3.0 + i as f32 * 5.0;
        s.circle(Color::hex(palette::FOLIAGE), Vec2::new(x + 1.0, r.origin.y), 1.8);
        s.circle(Color::hex(*hex), Vec2::new(x, r.origin.y - 0.5), 1.2);
    }
}

fn door(s: &mut dyn Surface, origin: Vec2) {
    let (ox, oy) = (origin.x, origin.y);
    s.set_fill_color(Color::hex(palette::WOOD_DARK));
    s.begin_path();
    s.move_to(Vec2::new(ox + 55.0, oy + 110.0));
    s.line_to(Vec2::new(ox + 55.0, oy + 92.0));
    s.arc(Vec2::new(ox + 65.0, oy + 92.0), 10.0, PI, 2.0 * PI);
    s.line_to(Vec2::new(ox + 75.0, oy + 110.0));
    s.close_path();
    s.fill();
    s.circle(Color::hex(palette::GOLD), Vec2::new(ox + 71.0, oy + 100.0), 1.0);
}

/// Small-paned ground floor window.
fn bay_window(s: &mut dyn Surface, r: Rect) {
    s.rect(Color::hex(palette::GLASS_LIT).shade(-0.2), r);
    s.set_fill_color(Color::hex(palette::WINDOW_FRAME));
    for i in 1..4 {
        s.fill_rect(Rect::new(r.origin.x + i as f32 * r.size.x / 4.0 - 0.5, r.origin.y, 1.0, r.size.y));
    }
    s.fill_rect(Rect::new(r.origin.x, r.center().y - 0.5, r.size.x, 1.0));
    s.set_stroke(Color::hex(palette::WINDOW_FRAME));
    s.set_line_width(1.5);
    s.stroke_rect(r);
}

/// Wall lantern hanging from a bracket at `top`.
fn lantern(s: &mut dyn Surface, top: Vec2) {
    s.circle(Color::hex_alpha(palette::GLASS_LIT, 0.25), Vec2::new(top.x, top.y + 4.0), 5.0);
    s.line(Color::hex(palette::IRON), 1.0, Vec2::new(top.x, top.y - 3.0), top);
    s.rect(Color::hex(palette::IRON), Rect::new(top.x - 2.5, top.y, 5.0, 1.0));
    s.rect(Color::hex(palette::GLASS_LIT), Rect::new(top.x - 2.0, top.y + 1.0, 4.0, 6.0));
}

#[cfg(test)]
mod tests {
    use skyline_engine::paint::Paint;
    use skyline_engine::scene::DrawList;

    use super::*;
    use crate::painter::Painter;

    /// Surface reporting a fixed text width and keeping rounded rects only.
    struct SignProbe {
        text_width: f32,
        rounded: Vec<Rect>,
    }

    impl Surface for SignProbe {
        fn set_fill(&mut self, _: Paint) {}
        fn set_stroke(&mut self, _: Color) {}
        fn set_line_width(&mut self, _: f32) {}
        fn save(&mut self) {}
        fn restore(&mut self) {}
        fn fill_rect(&mut self, _: Rect) {}
        fn stroke_rect(&mut self, _: Rect) {}
        fn fill_rounded_rect(&mut self, rect: Rect, _: CornerRadii) {
            self.rounded.push(rect);
        }
        fn fill_circle(&mut self, _: Vec2, _: f32) {}
        fn fill_ellipse(&mut self, _: Vec2, _: Vec2) {}
        fn begin_path(&mut self) {}
        fn move_to(&mut self, _: Vec2) {}
        fn line_to(&mut self, _: Vec2) {}
        fn arc(&mut self, _: Vec2, _: f32, _: f32, _: f32) {}
        fn close_path(&mut self) {}
        fn fill(&mut self) {}
        fn stroke(&mut self) {}
        fn fill_text(&mut self, _: &str, _: Vec2, _: f32, _: TextAlign) {}
        fn measure_text(&self, _: &str, _: f32) -> f32 {
            self.text_width
        }
    }

    fn board_width(text_width: f32) -> f32 {
        let mut probe = SignProbe { text_width, rounded: Vec::new() };
        draw_pub(&mut probe, Vec2::new(380.0, 430.0), "The Crown & Anchor");
        probe.rounded[0].size.x
    }

    #[test]
    fn short_names_get_the_minimum_board() {
        assert_eq!(pub_sign_width(60.0), 85.0);
        assert_eq!(board_width(60.0), 85.0);
    }

    #[test]
    fn long_names_widen_the_board() {
        assert_eq!(pub_sign_width(90.0), 110.0);
        assert_eq!(board_width(90.0), 110.0);
    }

    #[test]
    fn board_is_centered_on_the_door() {
        let mut probe = SignProbe { text_width: 90.0, rounded: Vec::new() };
        draw_pub(&mut probe, Vec2::new(0.0, 0.0), "x");
        assert_eq!(probe.rounded[0].center().x, 65.0);
    }

    #[test]
    fn extent_covers_roof_overhang_and_chimney() {
        let mut list = DrawList::new();
        draw_pub(&mut Painter::new(&mut list), Vec2::new(380.0, 430.0), "The Crown & Anchor");
        let b = list.bounds().unwrap();
        assert_eq!(b.min(), Vec2::new(376.0, 421.0));
        assert_eq!(b.max(), Vec2::new(514.0, 540.0));
    }
}
