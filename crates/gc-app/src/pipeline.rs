use gc_core::config::ConvertOptions;
use gc_core::error::ConvertError;
use gc_core::frame::{ArtGrid, Dimensions};

/// Completed conversion, handed whole to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The glyph/color grid.
    pub grid: ArtGrid,
    /// Grid size in character cells.
    pub dims: Dimensions,
    /// The width bound the conversion was requested with.
    pub max_width: u32,
}

/// Terminal message of a delegated conversion. Exactly one reply per
/// accepted request; only a message string crosses the boundary on
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertReply {
    /// Conversion completed; the grid is complete, never partial.
    Success {
        /// The glyph/color grid.
        grid: ArtGrid,
        /// Grid size in character cells.
        dims: Dimensions,
    },
    /// Conversion failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

/// Shared conversion pipeline: fetch → decode → sample → quantize.
///
/// Both execution strategies call this one function with the same
/// options, so ramps and cell metrics cannot drift between them. The
/// call blocks for the full duration (network fetch included).
///
/// # Errors
/// Any stage failure aborts the whole conversion; see `ConvertError`.
pub fn convert(source: &str, opts: &ConvertOptions) -> Result<Conversion, ConvertError> {
    opts.validate()?;
    let ramp = opts.char_ramp()?;
    let decoded = gc_source::load_source(source)?;
    let sampled = gc_source::resize::sample(&decoded, opts)?;
    let grid = gc_ascii::quantize(&sampled, &ramp)?;
    let dims = grid.dims();
    log::info!(
        "converted {source} ({}×{} px) to {}×{} cells",
        decoded.width,
        decoded.height,
        dims.width,
        dims.height
    );
    Ok(Conversion {
        grid,
        dims,
        max_width: opts.max_width,
    })
}

/// Run a conversion on a dedicated worker thread.
///
/// The worker owns its buffers and shares no mutable state with the
/// caller; the returned channel delivers exactly one terminal
/// `ConvertReply`. Dropping the receiver is the only cancellation:
/// the in-flight computation is not interrupted, its result is
/// discarded on send.
///
/// # Errors
/// Returns an error only if the worker thread cannot be spawned.
pub fn spawn_conversion(
    source: String,
    opts: ConvertOptions,
) -> anyhow::Result<flume::Receiver<ConvertReply>> {
    let (reply_tx, reply_rx) = flume::bounded(1);
    std::thread::Builder::new()
        .name("gc-convert".into())
        .spawn(move || {
            let reply = match convert(&source, &opts) {
                Ok(c) => ConvertReply::Success {
                    grid: c.grid,
                    dims: c.dims,
                },
                Err(e) => ConvertReply::Error {
                    message: e.to_string(),
                },
            };
            if reply_tx.send(reply).is_err() {
                log::debug!("conversion receiver dropped before reply");
            }
        })?;
    Ok(reply_rx)
}
