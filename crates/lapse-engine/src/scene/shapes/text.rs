use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Horizontal anchoring of a text label relative to its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextAlign {
    /// `origin.x` is the left edge of the first glyph's advance.
    Left,
    /// `origin.x` is the midpoint of the label's advance width.
    Center,
}

/// Single-line text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Baseline anchor. `origin.y` is the baseline, `origin.x` is interpreted
    /// per `align`.
    pub origin: Vec2,
    pub align: TextAlign,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        align: TextAlign,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            align,
        }));
    }
}
