use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Single-line text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// `None` when no font was loaded; the rasterizer skips such text.
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text line in logical pixels.
    pub origin: Vec2,
    /// Advance width measured when the command was recorded.
    pub width: f32,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        self.push(z, DrawCmd::Text(cmd));
    }
}
