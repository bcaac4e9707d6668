use thiserror::Error;

/// Errors a conversion can fail with.
///
/// A conversion is all-or-nothing: any of these aborts the whole run,
/// no partial grid is ever returned or cached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Resource unreachable or undecodable.
    #[error("Image load failed for {resource}: {reason}")]
    ImageLoad {
        /// The source identifier (path or URL) that failed.
        resource: String,
        /// Underlying failure description.
        reason: String,
    },

    /// No pixel surface obtainable for the target geometry.
    #[error("Pixel surface unavailable: {reason}")]
    SurfaceUnavailable {
        /// Why the surface could not be created.
        reason: String,
    },

    /// Failure reading decoded pixel data.
    #[error("Pixel access failed: {0}")]
    PixelAccess(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Catch-all for the worker boundary. Only a message string
    /// crosses the execution-context boundary.
    #[error("{0}")]
    Unknown(String),
}
