use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::ramp::{CharRamp, RAMP_VISUAL};

/// Options for one conversion. Sérialisable en TOML, chaque champ a
/// une valeur par défaut saine.
///
/// Both execution strategies receive the same `ConvertOptions`, so the
/// ramp and cell metrics cannot drift between them.
///
/// # Example
/// ```
/// use gc_core::config::ConvertOptions;
/// let opts = ConvertOptions::default();
/// assert_eq!(opts.max_width, 150);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConvertOptions {
    /// Upper bound on the character-grid width. The grid height is
    /// always derived, never specified independently.
    pub max_width: u32,
    /// Glyph ramp, darkest→brightest. At least 2 glyphs.
    pub ramp: String,
    /// Glyph cell width in font pixels.
    pub cell_width_px: u32,
    /// Glyph cell height in font pixels.
    pub cell_height_px: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_width: 150,
            ramp: RAMP_VISUAL.to_string(),
            cell_width_px: 5,
            cell_height_px: 7,
        }
    }
}

impl ConvertOptions {
    /// Validate the option invariants.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` naming the offending field.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.max_width == 0 {
            return Err(ConvertError::Config(
                "max_width must be a positive integer".into(),
            ));
        }
        if self.ramp.chars().count() < 2 {
            return Err(ConvertError::Config(format!(
                "ramp needs at least 2 glyphs, got {}",
                self.ramp.chars().count()
            )));
        }
        if self.cell_width_px == 0 || self.cell_height_px == 0 {
            return Err(ConvertError::Config(format!(
                "cell metrics must be non-zero, got {}×{}",
                self.cell_width_px, self.cell_height_px
            )));
        }
        Ok(())
    }

    /// Character cell aspect ratio (width / height).
    ///
    /// Compresses vertical resolution so glyphs taller than wide do
    /// not stretch the output. 5/7 matches the display font metrics.
    #[must_use]
    pub fn char_aspect(&self) -> f64 {
        f64::from(self.cell_width_px) / f64::from(self.cell_height_px)
    }

    /// Build the configured ramp.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for a degenerate ramp.
    pub fn char_ramp(&self) -> Result<CharRamp, ConvertError> {
        CharRamp::new(&self.ramp)
    }
}

/// Load options from a TOML file. Missing fields take defaults.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_options(path: &Path) -> Result<ConvertOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let opts: ConvertOptions =
        toml::from_str(&text).with_context(|| format!("TOML invalide : {}", path.display()))?;
    opts.validate()?;
    log::debug!(
        "options chargées depuis {} (max_width {}, ramp {} glyphes)",
        path.display(),
        opts.max_width,
        opts.ramp.chars().count()
    );
    Ok(opts)
}
