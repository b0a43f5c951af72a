//! CPU rasterizer.
//!
//! Responsibilities:
//! - consume a [`DrawList`] in paint order and composite it into a [`Frame`]
//! - keep shape-specific rasterization isolated per shape file
//!
//! Edges are anti-aliased over roughly one pixel of signed distance. All
//! writes are clipped to the frame; nothing here fails or panics on odd
//! geometry — degenerate commands are skipped.

mod rounded_rect;
mod text;

use crate::scene::{DrawCmd, DrawList};
use crate::surface::Frame;
use crate::text::FontSystem;

/// Rasterizes `list` into `frame`, in insertion order.
pub fn render_list(frame: &mut Frame, list: &DrawList, fonts: &FontSystem) {
    for cmd in list.items() {
        match cmd {
            DrawCmd::RoundedRect(rr) => rounded_rect::render(frame, rr),
            DrawCmd::Text(t) => text::render(frame, t, fonts),
        }
    }
}
