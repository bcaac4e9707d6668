use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use gc_core::config::ConvertOptions;
use gc_core::error::ConvertError;
use gc_core::ramp::{RAMP_COMPACT, RAMP_FULL_ASCII, RAMP_VISUAL};

pub mod cli;
pub mod pipeline;
pub mod render;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;
    let source = cli.source.clone().context("source manquante")?;

    // 4. Charger les options
    let mut opts = resolve_options(&cli)?;

    // 4b. Appliquer les overrides CLI
    if let Some(width) = cli.max_width {
        opts.max_width = width;
    }
    if let Some(ref name) = cli.ramp {
        match ramp_preset(name) {
            Some(ramp) => opts.ramp = ramp.to_string(),
            None => log::warn!("Ramp inconnue '{name}', utilisation de la config."),
        }
    }
    opts.validate()?;

    // 5. Lancer la conversion (inline ou déléguée à un worker)
    let conversion = if cli.worker {
        let rx = pipeline::spawn_conversion(source, opts.clone())?;
        match rx.recv().context("worker exited without a reply")? {
            pipeline::ConvertReply::Success { grid, dims } => pipeline::Conversion {
                grid,
                dims,
                max_width: opts.max_width,
            },
            pipeline::ConvertReply::Error { message } => {
                return Err(ConvertError::Unknown(message).into());
            }
        }
    } else {
        pipeline::convert(&source, &opts)?
    };

    // 6. Rendre la grille
    if let Some(ref path) = cli.output {
        let file = File::create(path)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        let mut out = BufWriter::new(file);
        render::write_plain(&conversion.grid, &mut out)?;
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if cli.no_color {
            render::write_plain(&conversion.grid, &mut out)?;
        } else {
            render::write_ansi(&conversion.grid, &mut out)?;
        }
    }

    Ok(())
}

/// Resolve options: config file if present, defaults otherwise.
fn resolve_options(cli: &cli::Cli) -> Result<ConvertOptions> {
    if cli.config.exists() {
        gc_core::config::load_options(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertOptions::default())
    }
}

/// Built-in ramp preset by name.
fn ramp_preset(name: &str) -> Option<&'static str> {
    match name {
        "visual" => Some(RAMP_VISUAL),
        "compact" => Some(RAMP_COMPACT),
        "full" | "ascii" => Some(RAMP_FULL_ASCII),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_presets_resolve() {
        assert_eq!(ramp_preset("compact"), Some(RAMP_COMPACT));
        assert_eq!(ramp_preset("visual"), Some(RAMP_VISUAL));
        assert_eq!(ramp_preset("full"), Some(RAMP_FULL_ASCII));
        assert_eq!(ramp_preset("ascii"), Some(RAMP_FULL_ASCII));
        assert_eq!(ramp_preset("neon"), None);
    }
}
