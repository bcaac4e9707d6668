use crate::error::ConvertError;

/// 10 caractères — compact, bon contraste.
pub const RAMP_COMPACT: &str = " .:-=+*#%@";

/// Mixed-density visual ramp: light punctuation → thin strokes →
/// letters → curves → math symbols → dense letters → box drawing →
/// shade blocks. Tuned for screen display rather than strict density.
pub const RAMP_VISUAL: &str =
    " `^',.:;-_Il!i~+<>()[]{}|\\/│─tfjrxnuczXYUJCLQ0OZmwqpdbkhao·○1?*±=≤≥×÷≈√ΣΠΩΔδ∞YV#MW&8%B@$┌┐└┘├┤┬┴┼═║╔╗╚╝╠╣╦╩╬░▒▓";

/// All 95 printable ASCII characters in code-point order.
pub const RAMP_FULL_ASCII: &str =
    " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Ordered glyph ramp: index 0 = darkest, last index = brightest.
///
/// The ramp is explicit per-conversion configuration, never a hidden
/// module constant, so every execution strategy sees the same glyphs.
///
/// # Example
/// ```
/// use gc_core::ramp::CharRamp;
/// let ramp = CharRamp::new(" .:-=+*#%@").unwrap();
/// assert_eq!(ramp.glyph_for(0.0), ' ');
/// assert_eq!(ramp.glyph_for(255.0), '@');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRamp {
    glyphs: Vec<char>,
}

impl CharRamp {
    /// Build a ramp from a charset ordered darkest→brightest.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for ramps with fewer than 2
    /// glyphs — a single glyph has no visible gradation.
    pub fn new(charset: &str) -> Result<Self, ConvertError> {
        let glyphs: Vec<char> = charset.chars().collect();
        if glyphs.len() < 2 {
            return Err(ConvertError::Config(format!(
                "ramp needs at least 2 glyphs, got {}",
                glyphs.len()
            )));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Map a luminance value to a glyph.
    ///
    /// `index = floor((gray / 255) * (len - 1))`, clamped into
    /// `[0, len - 1]`. NaN input falls back to a blank glyph.
    /// Monotonic non-decreasing in `gray`.
    #[inline]
    #[must_use]
    pub fn glyph_for(&self, gray: f64) -> char {
        let idx = (gray / 255.0) * (self.glyphs.len() - 1) as f64;
        if idx.is_nan() {
            return ' ';
        }
        let idx = (idx.floor() as i64).clamp(0, self.glyphs.len() as i64 - 1);
        self.glyphs[idx as usize]
    }
}
