use std::f32::consts::PI;

use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::Surface;

pub const STORY_HEIGHT: f32 = 18.0;
pub const HOUSE_WIDTH: f32 = 30.0;
/// Center-to-center distance between neighbours in a cluster.
pub const CLUSTER_SPACING: f32 = 35.0;

/// Clusters hold between this many and [`MAX_CLUSTER`] houses.
pub const MIN_CLUSTER: u32 = 2;
pub const MAX_CLUSTER: u32 = 4;

/// Multi-story terraced house standing on `base` (bottom center).
///
/// Extent: 17 px either side of `base.x`, from `base.y - stories * 18 - 3` down to `base.y`.
pub fn draw_row_house(s: &mut dyn Surface, base: Vec2, stories: u32, color: Color) {
    let half = HOUSE_WIDTH * 0.5;
    let height = stories as f32 * STORY_HEIGHT;
    let top = base.y - height;

    s.rect(color, Rect::new(base.x - half, top, HOUSE_WIDTH, height));

    for story in 0..stories {
        let story_top = base.y - (story + 1) as f32 * STORY_HEIGHT;
        if story > 0 {
            // String course between floors.
            s.rect(color.shade(0.25), Rect::new(base.x - half - 1.0, story_top + STORY_HEIGHT - 1.5, HOUSE_WIDTH + 2.0, 1.5));
        }
        if story == 0 {
            draw_ground_floor(s, base, color);
        } else {
            for dx in [-10.0, 3.0] {
                arched_window(s, Rect::new(base.x + dx, story_top + 4.0, 7.0, 10.0));
            }
        }
    }

    // Cornice with a row of dentils.
    s.rect(color.shade(-0.3), Rect::new(base.x - half - 2.0, top - 3.0, HOUSE_WIDTH + 4.0, 3.0));
    s.set_fill_color(color.shade(0.3));
    for i in 0..6 {
        s.fill_rect(Rect::new(base.x - half + 1.5 + i as f32 * 5.0, top, 2.0, 1.5));
    }
}

fn draw_ground_floor(s: &mut dyn Surface, base: Vec2, color: Color) {
    s.set_fill_color(Color::hex(palette::WOOD_DARK));
    s.fill_rounded_rect(Rect::new(base.x - 4.0, base.y - 13.0, 8.0, 13.0), CornerRadii::top(4.0));
    s.circle(Color::hex(palette::GOLD), Vec2::new(base.x + 2.0, base.y - 6.0), 0.7);

    for dx in [-12.5, 7.5] {
        arched_window(s, Rect::new(base.x + dx, base.y - 14.0, 5.0, 9.0));
    }
    // Doorstep.
    s.rect(color.shade(-0.4), Rect::new(base.x - 5.0, base.y - 1.5, 10.0, 1.5));
}

/// Window with a semicircular head, framed in stone.
fn arched_window(s: &mut dyn Surface, r: Rect) {
    let radius = r.size.x * 0.5;
    let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);

    s.set_fill_color(Color::hex(palette::GLASS));
    s.begin_path();
    s.move_to(Vec2::new(x, y + h));
    s.line_to(Vec2::new(x, y + radius));
    s.arc(Vec2::new(x + radius, y + radius), radius, PI, 2.0 * PI);
    s.line_to(Vec2::new(x + w, y + h));
    s.close_path();
    s.fill();

    s.set_stroke(Color::hex(palette::WINDOW_FRAME));
    s.set_line_width(0.8);
    s.stroke();

    // Sill.
    s.rect(Color::hex(palette::WINDOW_FRAME), Rect::new(x - 0.5, y + h, w + 1.0, 1.0));
}

/// One house of a cluster, relative to the cluster center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClusterHouse {
    pub offset: f32,
    pub stories: u32,
    pub color: Color,
}

/// Houses and fillers of one cluster, derived from its size and variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPlan {
    pub houses: Vec<ClusterHouse>,
    /// Offsets of the connecting fillers, one between each pair of neighbours.
    pub fillers: Vec<f32>,
}

/// Lays out `count` houses (clamped to 2–4) 35 px apart, centered on zero.
///
/// Story counts cycle through 2–4 and colors through the facade palette,
/// both shifted by `variant` so neighbouring clusters differ.
pub fn row_cluster_plan(count: u32, variant: u32) -> ClusterPlan {
    let n = count.clamp(MIN_CLUSTER, MAX_CLUSTER);
    let mid = (n - 1) as f32 * 0.5;

    let houses: Vec<ClusterHouse> = (0..n)
        .map(|i| ClusterHouse {
            offset: (i as f32 - mid) * CLUSTER_SPACING,
            stories: 2 + (variant + i * 2) % 3,
            color: Color::hex(palette::FACADES[((variant + i) as usize) % palette::FACADES.len()]),
        })
        .collect();
    let fillers = houses.windows(2).map(|w| (w[0].offset + w[1].offset) * 0.5).collect();

    ClusterPlan { houses, fillers }
}

/// Draws a cluster of row houses on a shared ground line through `center`.
///
/// Extent: `(n - 1) * 17.5 + 17` px either side of `center.x`, at most 75 px tall.
pub fn draw_row_cluster(s: &mut dyn Surface, center: Vec2, count: u32, variant: u32) {
    let plan = row_cluster_plan(count, variant);

    // Fillers first so the houses overlap their edges.
    let gap = CLUSTER_SPACING - HOUSE_WIDTH;
    for &offset in &plan.fillers {
        let x = center.x + offset;
        s.rect(Color::hex(palette::STONE_DARK), Rect::new(x - gap * 0.5, center.y - 16.0, gap, 16.0));
        s.rect(Color::hex(palette::STONE), Rect::new(x - gap * 0.5 - 1.0, center.y - 18.0, gap + 2.0, 2.0));
    }

    for house in &plan.houses {
        draw_row_house(s, Vec2::new(center.x + house.offset, center.y), house.stories, house.color);
    }
}
