use std::path::PathBuf;

use clap::Parser;

/// glyphcast — image to colored character-art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source : chemin vers une image (PNG, JPEG, BMP, GIF) ou
    /// URL http(s).
    pub source: Option<String>,

    /// Upper bound on the character-grid width. Height is derived.
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Ramp preset: "visual", "compact", "full".
    #[arg(long)]
    pub ramp: Option<String>,

    /// Run the conversion on a worker thread instead of inline.
    #[arg(long, default_value_t = false)]
    pub worker: bool,

    /// Write plain-text output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Désactiver la couleur.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that an image source was provided.
    ///
    /// # Errors
    /// Returns an error if no source is specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        if self.source.is_none() {
            anyhow::bail!("Aucune source spécifiée. Passez un chemin d'image ou une URL.");
        }
        Ok(())
    }
}
