use crate::layout::background_plan;
use crate::surface::Surface;

/// Draws the whole city background onto `s`.
///
/// The pass is bracketed by `save`/`restore`, so the caller's style is the same
/// before and after. Output depends on nothing but the surface, which makes
/// repeated calls identical.
pub fn render_background(s: &mut dyn Surface) {
    let plan = background_plan();

    s.save();
    for decoration in &plan {
        log::trace!("drawing {:?}", decoration.category());
        decoration.draw(s);
    }
    s.restore();

    log::debug!("background drawn: {} decorations", plan.len());
}

#[cfg(test)]
mod tests {
    use skyline_engine::coords::Vec2;
    use skyline_engine::paint::{Color, Paint};
    use skyline_engine::render::{RasterConfig, Rasterizer};
    use skyline_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::CANVAS;
    use crate::painter::Painter;

    fn record() -> DrawList {
        let mut list = DrawList::new();
        render_background(&mut Painter::new(&mut list));
        list
    }

    // ── determinism ──

    #[test]
    fn repeated_renders_record_identical_scenes() {
        assert_eq!(record().items(), record().items());
    }

    #[test]
    fn rasterized_background_is_byte_identical() {
        let raster = || {
            let mut list = record();
            let pixmap = Rasterizer::new(RasterConfig::default().viewport(CANVAS)).render(&mut list, None).unwrap();
            pixmap.data().to_vec()
        };
        assert_eq!(raster(), raster());
    }

    #[test]
    fn texture_is_painted_first_over_the_whole_canvas() {
        let list = record();
        match &list.items()[0].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.rect, CANVAS.bounds()),
            other => panic!("expected the ground rect, got {other:?}"),
        }
    }

    // ── bounds ──

    #[test]
    fn every_shape_lands_on_the_canvas() {
        let canvas = CANVAS.bounds();
        for item in record().items() {
            if let Some(b) = item.cmd.bounds() {
                assert!(canvas.contains_rect(b), "{:?} escapes the canvas", item.cmd);
            }
        }
    }

    // ── style ──

    #[test]
    fn caller_style_survives_the_pass() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        painter.set_fill_color(Color::hex(0x123456));
        painter.set_stroke(Color::hex(0x654321));
        painter.set_line_width(3.0);
        let before = painter.style().clone();

        render_background(&mut painter);

        assert_eq!(painter.style(), &before);
        assert_eq!(painter.save_depth(), 0);
    }

    #[test]
    fn pass_leaves_the_current_path_alone_for_the_caller_to_reset() {
        // Paths are not part of saved style; a caller drawing afterwards starts
        // its own path and sees only its own geometry.
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            render_background(&mut painter);
            painter.set_fill(Paint::Solid(Color::white()));
            painter.begin_path();
            painter.move_to(Vec2::new(1.0, 1.0));
            painter.line_to(Vec2::new(2.0, 1.0));
            painter.line_to(Vec2::new(2.0, 2.0));
            painter.fill();
        }
        let last = list.items().last().unwrap().cmd.bounds().unwrap();
        assert_eq!(last.min(), Vec2::new(1.0, 1.0));
        assert_eq!(last.max(), Vec2::new(2.0, 2.0));
    }
}
