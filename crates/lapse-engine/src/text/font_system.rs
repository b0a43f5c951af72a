use std::fmt;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`].
///
/// A `FontId` that does not resolve in the system it is used against is not
/// an error: measurement falls back to deterministic estimates and
/// rasterization skips the label.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub usize);

/// Fallback ascent as a fraction of the font size, used when no font is
/// loaded. Descent is the remainder below the baseline.
const FALLBACK_ASCENT_FRAC: f32 = 0.8;

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is shared with the render
/// loop so labels can be measured at paint time and glyphs rasterized on
/// demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Advance width of a single-line label in logical pixels.
    ///
    /// Returns `0.0` when `id` does not resolve, so centered placement
    /// degrades to the anchor point.
    #[must_use]
    pub fn measure_label(&self, text: &str, id: FontId, size: f32) -> f32 {
        let Some(font) = self.get(id) else {
            return 0.0;
        };
        text.chars()
            .map(|ch| font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Returns `(ascent, descent)` for `id` at `size`, in logical pixels.
    ///
    /// Ascent is positive above the baseline, descent non-positive below it.
    /// Falls back to a deterministic estimate (`0.8 × size`, `-0.2 × size`)
    /// when `id` does not resolve or the font carries no horizontal metrics,
    /// so baseline math stays usable without font assets.
    #[must_use]
    pub fn line_metrics(&self, id: FontId, size: f32) -> (f32, f32) {
        if let Some(metrics) = self.get(id).and_then(|f| f.horizontal_line_metrics(size)) {
            (metrics.ascent, metrics.descent)
        } else {
            (
                size * FALLBACK_ASCENT_FRAC,
                -size * (1.0 - FALLBACK_ASCENT_FRAC),
            )
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_label_without_font_is_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_label("00", FontId(0), 13.0), 0.0);
    }

    #[test]
    fn line_metrics_fallback_is_deterministic() {
        let fonts = FontSystem::new();
        let (ascent, descent) = fonts.line_metrics(FontId(3), 10.0);
        assert_eq!(ascent, 8.0);
        assert_eq!(descent, -2.0);
    }

    #[test]
    fn load_font_rejects_garbage() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[0x00, 0x01, 0x02]).is_err());
    }
}
