use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// A positioned, rasterized glyph: coverage bytes, row-major, `width * height` long.
pub(crate) struct GlyphBitmap {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Text commands refer to them by [`FontId`],
/// so the same `FontSystem` must be handed to the rasterizer that plays the list.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {} ({} glyphs)", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the advance extent of a single line of text.
    ///
    /// Returns `(width, height)` in logical pixels. Unknown fonts and empty strings
    /// measure zero wide and one line tall.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let glyphs = Self::layout(font, text, size);
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph, not the bitmap's right edge.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size * 1.2, f32::max);
        Vec2::new(w, h)
    }

    /// Lays out and rasterizes `text` with its top-left at the origin.
    pub(crate) fn rasterize(&self, text: &str, id: FontId, size: f32) -> Vec<GlyphBitmap> {
        let Some(font) = self.get(id) else {
            return Vec::new();
        };
        Self::layout(font, text, size)
            .into_iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| {
                let (_, coverage) = font.rasterize_config(g.key);
                GlyphBitmap { x: g.x, y: g.y, width: g.width, height: g.height, coverage }
            })
            .collect()
    }

    fn layout(font: &fontdue::Font, text: &str, size: f32) -> Vec<GlyphPosition> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size.max(0.0), 0));
        layout.glyphs().clone()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
