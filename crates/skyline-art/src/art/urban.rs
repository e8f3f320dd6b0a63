//! Everyday city fabric: generic buildings, street infrastructure, shop and
//! transit signs, and small street elements.
//!
//! All routines anchor at `base`, the bottom center of the drawn object.

use std::f32::consts::PI;

use skyline_engine::coords::{CornerRadii, Rect, Vec2};
use skyline_engine::paint::Color;

use crate::palette;
use crate::surface::{Surface, TextAlign};

// ── buildings ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UrbanBuildingKind {
    Office,
    Shop,
    Apartment,
}

/// Rectangular building of the given footprint with kind-specific details.
///
/// Extent: `x ± (width / 2 + 2)`, `y - height - 4 ..= y`.
pub fn draw_urban_building(s: &mut dyn Surface, base: Vec2, width: f32, height: f32, kind: UrbanBuildingKind) {
    let body = Rect::new(base.x - width * 0.5, base.y - height, width, height);
    let (wall, trim) = match kind {
        UrbanBuildingKind::Office => (0x9aa7b0, 0x5d6870),
        UrbanBuildingKind::Shop => (0xd9c7a7, 0x8e4a32),
        UrbanBuildingKind::Apartment => (0xc08a6a, 0x6f4a38),
    };
    let wall = Color::hex(wall);
    let trim = Color::hex(trim);

    s.rect(wall, body);
    s.rect(trim, Rect::new(body.origin.x - 2.0, body.origin.y - 4.0, width + 4.0, 4.0));

    match kind {
        UrbanBuildingKind::Office => {
            // Continuous ribbon windows.
            s.set_fill_color(Color::hex(palette::GLASS));
            let mut y = body.origin.y + 5.0;
            while y + 4.0 <= base.y - 4.0 {
                s.fill_rect(Rect::new(body.origin.x + 3.0, y, width - 6.0, 4.0));
                y += 8.0;
            }
        }
        UrbanBuildingKind::Shop => {
            let awning = Rect::new(body.origin.x + 2.0, base.y - 20.0, width - 4.0, 5.0);
            let stripe_count = ((awning.size.x / 4.0).floor() as u32).max(1);
            let stripe_w = awning.size.x / stripe_count as f32;
            for i in 0..stripe_count {
                let color = if i % 2 == 0 { trim } else { Color::hex(palette::WHITE) };
                s.rect(color, Rect::new(awning.origin.x + i as f32 * stripe_w, awning.origin.y, stripe_w, awning.size.y));
            }
            s.rect(Color::hex(palette::GLASS), Rect::new(body.origin.x + 3.0, base.y - 14.0, width - 6.0, 10.0));
            s.rect(Color::hex(palette::WOOD_DARK), Rect::new(base.x - 3.0, base.y - 12.0, 6.0, 12.0));
            draw_punched_windows(s, body, base.y - 24.0);
        }
        UrbanBuildingKind::Apartment => {
            draw_punched_windows(s, body, base.y - 4.0);
            // Balconies on every other window row.
            s.set_fill_color(trim);
            let mut y = body.origin.y + 12.0;
            while y + 1.5 <= base.y - 8.0 {
                s.fill_rect(Rect::new(body.origin.x + 2.0, y, width - 4.0, 1.5));
                y += 16.0;
            }
        }
    }
}

/// Grid of small windows from the top of `body` down to `floor`.
fn draw_punched_windows(s: &mut dyn Surface, body: Rect, floor: f32) {
    let cols = ((body.size.x - 4.0) / 8.0).floor().max(0.0) as u32;
    let lit = Color::hex(palette::GLASS_LIT);
    let dark = Color::hex(palette::GLASS);

    let mut y = body.origin.y + 4.0;
    let mut row = 0;
    while y + 5.0 <= floor {
        for col in 0..cols {
            let color = if (row + col) % 3 == 0 { lit } else { dark };
            s.rect(color, Rect::new(body.origin.x + 4.0 + col as f32 * 8.0, y, 4.0, 5.0));
        }
        y += 8.0;
        row += 1;
    }
}

// ── infrastructure ────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InfrastructureKind {
    Streetlight,
    Mailbox,
    Hydrant,
    Bench,
}

/// Street infrastructure piece.
///
/// Extents: streetlight `x ± 4`, `y - 35`; mailbox `x ± 4`, `y - 14`;
/// hydrant `x ± 4`, `y - 10`; bench `x ± 8`, `y - 8`.
pub fn draw_infrastructure(s: &mut dyn Surface, base: Vec2, kind: InfrastructureKind) {
    let iron = Color::hex(palette::IRON);
    match kind {
        InfrastructureKind::Streetlight => {
            s.rect(iron, Rect::new(base.x - 1.0, base.y - 32.0, 2.0, 32.0));
            s.rect(iron, Rect::new(base.x - 2.5, base.y - 2.0, 5.0, 2.0));
            s.circle(Color::hex_alpha(palette::GLASS_LIT, 0.3), Vec2::new(base.x, base.y - 31.0), 4.0);
            s.set_fill_color(iron);
            s.fill_rounded_rect(Rect::new(base.x - 2.5, base.y - 35.0, 5.0, 2.5), CornerRadii::top(1.5));
            s.circle(Color::hex(palette::GLASS_LIT), Vec2::new(base.x, base.y - 31.0), 1.8);
        }
        InfrastructureKind::Mailbox => {
            s.rect(iron, Rect::new(base.x - 1.0, base.y - 6.0, 2.0, 6.0));
            let red = Color::hex(palette::SIGNAL_RED);
            s.set_fill_color(red);
            s.fill_rounded_rect(Rect::new(base.x - 4.0, base.y - 14.0, 8.0, 8.0), CornerRadii::top(4.0));
            s.rect(red.shade(-0.45), Rect::new(base.x - 2.0, base.y - 10.5, 4.0, 1.0));
        }
        InfrastructureKind::Hydrant => {
            let red = Color::hex(palette::SIGNAL_RED);
            s.rect(red, Rect::new(base.x - 2.5, base.y - 8.0, 5.0, 8.0));
            s.rect(red.shade(-0.25), Rect::new(base.x - 4.0, base.y - 6.0, 8.0, 2.0));
            s.set_fill_color(red.shade(0.15));
            s.begin_path();
            s.arc(Vec2::new(base.x, base.y - 8.0), 2.0, PI, 2.0 * PI);
            s.close_path();
            s.fill();
            s.rect(red.shade(-0.3), Rect::new(base.x - 3.0, base.y - 1.0, 6.0, 1.0));
        }
        InfrastructureKind::Bench => {
            let wood = Color::hex(palette::WOOD);
            s.rect(wood, Rect::new(base.x - 8.0, base.y - 8.0, 16.0, 1.5));
            s.rect(wood, Rect::new(base.x - 8.0, base.y - 4.5, 16.0, 1.5));
            s.set_fill_color(iron);
            for dx in [-7.0, 6.0] {
                s.fill_rect(Rect::new(base.x + dx, base.y - 3.0, 1.0, 3.0));
            }
        }
    }
}

// ── signs ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SignKind {
    Parking,
    Bus,
    Cafe,
}

/// Sign panel on a post.
///
/// Extent: `x ± 7`, `y - 30 ..= y`. The parking sign carries a centered "P".
pub fn draw_sign(s: &mut dyn Surface, base: Vec2, kind: SignKind) {
    s.rect(Color::hex(palette::STEEL), Rect::new(base.x - 0.75, base.y - 18.0, 1.5, 18.0));
    let panel = Rect::new(base.x - 7.0, base.y - 30.0, 14.0, 12.0);
    let white = Color::hex(palette::WHITE);

    match kind {
        SignKind::Parking => {
            s.set_fill_color(Color::hex(palette::SIGN_BLUE));
            s.fill_rounded_rect(panel, CornerRadii::all(1.5));
            s.set_fill_color(white);
            s.fill_text("P", Vec2::new(base.x, base.y - 29.5), 9.0, TextAlign::Center);
        }
        SignKind::Bus => {
            s.set_fill_color(Color::hex(palette::SIGNAL_GREEN).shade(-0.2));
            s.fill_rounded_rect(panel, CornerRadii::all(1.5));
            // Bus silhouette: body, windscreen strip and wheels.
            s.set_fill_color(white);
            s.fill_rounded_rect(Rect::new(base.x - 4.5, base.y - 28.0, 9.0, 6.5), CornerRadii::all(1.0));
            s.rect(Color::hex(palette::GLASS), Rect::new(base.x - 3.5, base.y - 27.0, 7.0, 2.0));
            s.set_fill_color(Color::hex(palette::IRON));
            for dx in [-2.5, 2.5] {
                s.fill_circle(Vec2::new(base.x + dx, base.y - 21.0), 1.0);
            }
        }
        SignKind::Cafe => {
            s.set_fill_color(Color::hex(palette::WOOD));
            s.fill_rounded_rect(panel, CornerRadii::all(1.5));
            // Steaming cup.
            s.rect(white, Rect::new(base.x - 3.0, base.y - 25.0, 5.0, 4.5));
            s.set_stroke(white);
            s.set_line_width(0.8);
            s.begin_path();
            s.arc(Vec2::new(base.x + 2.5, base.y - 23.0), 1.3, -PI * 0.5, PI * 0.5);
            s.stroke();
            s.line(Color::hex_alpha(palette::WHITE, 0.7), 0.6, Vec2::new(base.x - 1.0, base.y - 26.0), Vec2::new(base.x, base.y - 28.5));
        }
    }
}

// ── small elements ────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ElementKind {
    Planter,
    Bollard,
    Bin,
}

/// Small street element.
///
/// Extent: `x ± 7`, `y - 10 ..= y`.
pub fn draw_element(s: &mut dyn Surface, base: Vec2, kind: ElementKind) {
    match kind {
        ElementKind::Planter => {
            s.rect(Color::hex(palette::STONE_DARK), Rect::new(base.x - 6.0, base.y - 5.0, 12.0, 5.0));
            s.ellipse(Color::hex(palette::FOLIAGE), Vec2::new(base.x, base.y - 6.5), Vec2::new(6.0, 3.5));
            s.set_fill_color(Color::hex(palette::FLOWERS[0]));
            for dx in [-3.0, 0.5, 3.5] {
                s.fill_circle(Vec2::new(base.x + dx, base.y - 7.5), 1.0);
            }
        }
        ElementKind::Bollard => {
            let iron = Color::hex(palette::IRON);
            s.set_fill_color(iron);
            s.fill_rounded_rect(Rect::new(base.x - 1.5, base.y - 8.0, 3.0, 8.0), CornerRadii::top(1.5));
            s.rect(Color::hex(palette::WHITE), Rect::new(base.x - 1.5, base.y - 6.0, 3.0, 1.0));
        }
        ElementKind::Bin => {
            let green = Color::hex(palette::FOLIAGE).shade(-0.25);
            s.rect(green, Rect::new(base.x - 3.5, base.y - 9.0, 7.0, 9.0));
            s.rect(green.shade(-0.3), Rect::new(base.x - 4.0, base.y - 10.0, 8.0, 1.5));
        }
    }
}
