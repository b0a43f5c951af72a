use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Rounded rectangle draw payload.
///
/// `radius == 0.0` draws sharp corners; there is no separate plain-rect
/// command. `border == None` means no stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
    pub border: Option<Border>,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, color: Color, border: Option<Border>) -> Self {
        Self { rect, radius, color, border }
    }
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: Color,
        border: Option<Border>,
    ) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radius, color, border)));
    }
}
