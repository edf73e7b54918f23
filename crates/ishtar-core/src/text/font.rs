use std::fmt;

/// Error returned by [`FontdueMetrics::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontError(pub String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font error: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Per-glyph horizontal metrics at a fixed base size.
///
/// This is the only font knowledge the shaper needs. Implementations
/// report metrics at [`base_size`](FontMetrics::base_size); the shaper
/// scales them to the requested text size.
pub trait FontMetrics {
    /// Pixel size the metrics below are reported at.
    fn base_size(&self) -> f32;

    /// Horizontal advance of `codepoint` at the base size.
    ///
    /// May be zero for glyphs whose font reports no advance; the shaper
    /// falls back to [`glyph_width`](FontMetrics::glyph_width) there.
    fn advance(&self, codepoint: char) -> f32;

    /// Rasterized bitmap width of `codepoint` at the base size.
    fn glyph_width(&self, codepoint: char) -> f32;
}

/// [`FontMetrics`] backed by a parsed TrueType/OpenType font.
pub struct FontdueMetrics {
    font: fontdue::Font,
    base_size: f32,
}

impl FontdueMetrics {
    /// Parses a font and fixes the size metrics are reported at.
    ///
    /// Setup-time only; the per-frame path never constructs fonts.
    pub fn from_bytes(bytes: &[u8], base_size: f32) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError(e.to_string()))?;
        log::debug!("font loaded: {} glyphs, base size {base_size}", font.glyph_count());
        Ok(Self {
            font,
            base_size: base_size.max(1.0),
        })
    }
}

impl FontMetrics for FontdueMetrics {
    fn base_size(&self) -> f32 {
        self.base_size
    }

    fn advance(&self, codepoint: char) -> f32 {
        self.font.metrics(codepoint, self.base_size).advance_width
    }

    fn glyph_width(&self, codepoint: char) -> f32 {
        self.font.metrics(codepoint, self.base_size).width as f32
    }
}
