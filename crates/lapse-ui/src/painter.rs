//! Countdown face painting.
//!
//! Pure command recording: given a resolved style and the three formatted
//! field labels, pushes the plates, digits, and colons into a [`DrawList`].
//! No side effects beyond the recorded commands, and nothing here fails — a
//! missing font degrades to plates without text.

use lapse_engine::coords::{Rect, Vec2};
use lapse_engine::scene::{DrawList, TextAlign};
use lapse_engine::text::FontSystem;

use crate::style::ResolvedStyle;

const COLON: &str = ":";

/// The colon baseline sits slightly above the digit baseline so the glyph
/// reads as vertically centered against the flanking digits.
const COLON_BASELINE_SHIFT: f32 = 37.0 / 40.0;

/// Records the countdown face into a draw list.
///
/// Wraps the target [`DrawList`] together with the [`FontSystem`] used for
/// baseline metrics and label measurement.
pub struct CountdownPainter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
}

impl<'a> CountdownPainter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a FontSystem) -> Self {
        Self { draw_list, fonts }
    }

    /// Paints three plates left-to-right containing `hour`, `minute`, and
    /// `second`, with a colon in each gap.
    pub fn draw_time(&mut self, style: &ResolvedStyle, hour: &str, minute: &str, second: &str) {
        let plate_xs = [style.padding_left, style.first_rect_x, style.second_rect_x];
        let labels = [hour, minute, second];

        // Digit baseline relative to the plate top, centering the text
        // between ascent and descent. The same baseline anchors every plate.
        let baseline = style.font.map(|font| {
            let (ascent, descent) = self.fonts.line_metrics(font, style.digit_size);
            (style.rect_height + ascent + descent) / 2.0
        });

        for (x, label) in plate_xs.into_iter().zip(labels) {
            let plate = Rect::new(x, style.padding_top, style.rect_width, style.rect_height);
            self.draw_list.push_rounded_rect(
                plate,
                style.rect_radius,
                style.background_color,
                style.border.clone(),
            );

            if let (Some(font), Some(baseline)) = (style.font, baseline) {
                self.draw_list.push_text(
                    label,
                    font,
                    style.digit_size,
                    style.digit_color,
                    Vec2::new(plate.center().x, style.padding_top + baseline),
                    TextAlign::Center,
                );
            }
        }

        if let (Some(font), Some(baseline)) = (style.font, baseline) {
            for colon_x in [style.first_colon_x, style.second_colon_x] {
                self.draw_list.push_text(
                    COLON,
                    font,
                    style.colon_size,
                    style.colon_color,
                    Vec2::new(
                        colon_x,
                        style.padding_top + baseline * COLON_BASELINE_SHIFT,
                    ),
                    TextAlign::Center,
                );
            }
        }
    }
}
