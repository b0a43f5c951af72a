use crate::scene::{TextAlign, TextCmd};
use crate::surface::Frame;
use crate::text::FontSystem;

/// Rasterizes a `DrawCmd::Text`.
///
/// Glyph coverage bitmaps come from `fontdue`; each is blended at its
/// advance position relative to the baseline anchor. A `FontId` that does
/// not resolve renders nothing.
pub(crate) fn render(frame: &mut Frame, cmd: &TextCmd, fonts: &FontSystem) {
    let Some(font) = fonts.get(cmd.font) else {
        return;
    };
    if cmd.size <= 0.0 {
        return;
    }

    let mut pen_x = match cmd.align {
        TextAlign::Left => cmd.origin.x,
        TextAlign::Center => {
            cmd.origin.x - fonts.measure_label(&cmd.text, cmd.font, cmd.size) * 0.5
        }
    };

    for ch in cmd.text.chars() {
        let (metrics, bitmap) = font.rasterize(ch, cmd.size);

        // Bitmap top-left in frame space. `ymin` is the offset of the bitmap
        // bottom from the baseline, positive up.
        let glyph_x = pen_x + metrics.xmin as f32;
        let glyph_y = cmd.origin.y - (metrics.ymin + metrics.height as i32) as f32;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col] as f32 / 255.0;
                if coverage > 0.0 {
                    frame.blend_pixel(
                        (glyph_x + col as f32).round() as i32,
                        (glyph_y + row as f32).round() as i32,
                        cmd.color,
                        coverage,
                    );
                }
            }
        }

        pen_x += metrics.advance_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::text::FontId;

    #[test]
    fn unresolved_font_renders_nothing() {
        let mut frame = Frame::new(16, 16);
        let fonts = FontSystem::new();
        let cmd = TextCmd {
            text: "00".to_string(),
            font: FontId(0),
            size: 13.0,
            color: Color::white(),
            origin: Vec2::new(8.0, 12.0),
            align: TextAlign::Center,
        };
        render(&mut frame, &cmd, &fonts);
        assert_eq!(frame.pixel(8, 8).a, 0.0);
    }
}
