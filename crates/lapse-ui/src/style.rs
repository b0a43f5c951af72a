//! Countdown styling.
//!
//! [`CountdownStyle`] carries the paint parameters in density-independent
//! pixels (dp) with the stock defaults; [`Density`] converts to device
//! pixels; [`ResolvedStyle`] is the px-space snapshot the painter consumes,
//! including the precomputed plate and colon translate offsets.

use lapse_engine::paint::Color;
use lapse_engine::scene::Border;
use lapse_engine::text::FontId;

/// Default geometry and text sizes, in dp.
const DEFAULT_RECT_WIDTH: f32 = 18.0;
const DEFAULT_RECT_HEIGHT: f32 = 17.0;
const DEFAULT_RECT_SPACING: f32 = 6.0;
const DEFAULT_RECT_RADIUS: f32 = 2.66;
const DEFAULT_TIME_TEXT_SIZE: f32 = 13.0;
const DEFAULT_COLON_TEXT_SIZE: f32 = 13.0;

/// Pixels per density-independent pixel of the host display.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Density(pub f32);

impl Density {
    /// Dp to device pixels.
    #[inline]
    pub fn px(self, dp: f32) -> f32 {
        dp * self.0
    }
}

/// Border stroke configuration, in dp.
///
/// Absent entirely when no border should be drawn — there is no sentinel
/// width.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    pub width: f32,
    pub color: Color,
}

/// Paint parameters for the countdown face, in dp.
///
/// Built once with the stock defaults and adjusted through the setters;
/// geometry is resolved to pixels via [`resolve`](CountdownStyle::resolve).
///
/// # Example
/// ```rust,ignore
/// CountdownStyle::new()
///     .rect_radius(0.0)
///     .digit_color(Color::from_srgb_u8(0xff, 0xd5, 0x4f, 0xff))
///     .border(BorderStyle { width: 1.0, color: Color::black() })
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownStyle {
    rect_width: f32,
    rect_height: f32,
    rect_spacing: f32,
    rect_radius: f32,
    padding: [f32; 4], // left, top, right, bottom
    background_color: Color,
    digit_color: Color,
    colon_color: Color,
    border: Option<BorderStyle>,
    digit_size: f32,
    colon_size: f32,
    font: Option<FontId>,
}

impl CountdownStyle {
    pub fn new() -> Self {
        Self {
            rect_width: DEFAULT_RECT_WIDTH,
            rect_height: DEFAULT_RECT_HEIGHT,
            rect_spacing: DEFAULT_RECT_SPACING,
            rect_radius: DEFAULT_RECT_RADIUS,
            padding: [0.0; 4],
            background_color: Color::black(),
            digit_color: Color::white(),
            colon_color: Color::black(),
            border: None,
            digit_size: DEFAULT_TIME_TEXT_SIZE,
            colon_size: DEFAULT_COLON_TEXT_SIZE,
            font: None,
        }
    }

    pub fn rect_width(mut self, dp: f32) -> Self { self.rect_width = dp; self }
    pub fn rect_height(mut self, dp: f32) -> Self { self.rect_height = dp; self }
    pub fn rect_spacing(mut self, dp: f32) -> Self { self.rect_spacing = dp; self }
    pub fn rect_radius(mut self, dp: f32) -> Self { self.rect_radius = dp; self }

    /// Padding around the three plates: left, top, right, bottom.
    pub fn padding(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.padding = [left, top, right, bottom];
        self
    }

    pub fn background_color(mut self, v: Color) -> Self { self.background_color = v; self }
    pub fn digit_color(mut self, v: Color) -> Self { self.digit_color = v; self }
    pub fn colon_color(mut self, v: Color) -> Self { self.colon_color = v; self }
    pub fn border(mut self, v: BorderStyle) -> Self { self.border = Some(v); self }
    pub fn digit_size(mut self, dp: f32) -> Self { self.digit_size = dp; self }
    pub fn colon_size(mut self, dp: f32) -> Self { self.colon_size = dp; self }

    /// Font used for digits and colons. Without one, only the plates are
    /// painted.
    pub fn font(mut self, id: FontId) -> Self { self.font = Some(id); self }

    /// The natural size of the face in device pixels: three plates, two
    /// gaps, plus padding.
    pub fn preferred_size(&self, density: Density) -> (f32, f32) {
        let [left, top, right, bottom] = self.padding;
        (
            density.px(self.rect_width * 3.0 + self.rect_spacing * 2.0 + left + right),
            density.px(self.rect_height + top + bottom),
        )
    }

    /// Resolves dp-space parameters into the px-space snapshot the painter
    /// consumes.
    pub fn resolve(&self, density: Density) -> ResolvedStyle {
        let rect_width = density.px(self.rect_width);
        let rect_spacing = density.px(self.rect_spacing);
        let padding_left = density.px(self.padding[0]);

        // Translate offsets for the second and third plate, and for the two
        // colons centered in the gaps.
        let first_rect_x = rect_width + rect_spacing + padding_left;
        let second_rect_x = rect_width * 2.0 + rect_spacing * 2.0 + padding_left;
        let first_colon_x = first_rect_x - rect_spacing / 2.0;
        let second_colon_x = second_rect_x - rect_spacing / 2.0;

        ResolvedStyle {
            rect_width,
            rect_height: density.px(self.rect_height),
            rect_spacing,
            rect_radius: density.px(self.rect_radius),
            padding_left,
            padding_top: density.px(self.padding[1]),
            first_rect_x,
            second_rect_x,
            first_colon_x,
            second_colon_x,
            background_color: self.background_color,
            digit_color: self.digit_color,
            colon_color: self.colon_color,
            border: self
                .border
                .as_ref()
                .map(|b| Border::new(density.px(b.width), b.color)),
            digit_size: density.px(self.digit_size),
            colon_size: density.px(self.colon_size),
            font: self.font,
        }
    }
}

impl Default for CountdownStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Px-space style snapshot consumed by the painter.
///
/// Produced by [`CountdownStyle::resolve`]; immutable during a run except
/// when a style setter re-resolves it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub rect_width: f32,
    pub rect_height: f32,
    pub rect_spacing: f32,
    pub rect_radius: f32,
    pub padding_left: f32,
    pub padding_top: f32,
    /// Left edge of the minute plate.
    pub first_rect_x: f32,
    /// Left edge of the seconds plate.
    pub second_rect_x: f32,
    /// Center of the colon between the hour and minute plates.
    pub first_colon_x: f32,
    /// Center of the colon between the minute and seconds plates.
    pub second_colon_x: f32,
    pub background_color: Color,
    pub digit_color: Color,
    pub colon_color: Color,
    pub border: Option<Border>,
    pub digit_size: f32,
    pub colon_size: f32,
    pub font: Option<FontId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_at_density_one() {
        let style = CountdownStyle::new().resolve(Density(1.0));
        assert_eq!(style.rect_width, 18.0);
        assert_eq!(style.rect_height, 17.0);
        assert_eq!(style.rect_spacing, 6.0);
        assert_eq!(style.first_rect_x, 24.0);
        assert_eq!(style.second_rect_x, 48.0);
        assert_eq!(style.first_colon_x, 21.0);
        assert_eq!(style.second_colon_x, 45.0);
        assert!(style.border.is_none());
        assert!(style.font.is_none());
    }

    #[test]
    fn density_scales_geometry_and_offsets() {
        let style = CountdownStyle::new().resolve(Density(2.0));
        assert_eq!(style.rect_width, 36.0);
        assert_eq!(style.first_rect_x, 48.0);
        assert_eq!(style.second_rect_x, 96.0);
        assert_eq!(style.first_colon_x, 42.0);
        assert_eq!(style.digit_size, 26.0);
    }

    #[test]
    fn padding_shifts_the_plate_row() {
        let style = CountdownStyle::new()
            .padding(4.0, 2.0, 4.0, 2.0)
            .resolve(Density(1.0));
        assert_eq!(style.padding_left, 4.0);
        assert_eq!(style.padding_top, 2.0);
        assert_eq!(style.first_rect_x, 28.0);
        assert_eq!(style.first_colon_x, 25.0);
    }

    #[test]
    fn preferred_size_is_three_plates_two_gaps_plus_padding() {
        let style = CountdownStyle::new();
        assert_eq!(style.preferred_size(Density(1.0)), (66.0, 17.0));
        assert_eq!(style.preferred_size(Density(2.0)), (132.0, 34.0));

        let padded = CountdownStyle::new().padding(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padded.preferred_size(Density(1.0)), (70.0, 23.0));
    }

    #[test]
    fn border_resolves_to_pixel_width() {
        let style = CountdownStyle::new()
            .border(BorderStyle { width: 1.5, color: Color::black() })
            .resolve(Density(2.0));
        let border = style.border.unwrap();
        assert_eq!(border.width, 3.0);
        assert_eq!(border.color, Color::black());
    }
}
