/// Sampler/rasterizer for glyphcast: resource fetch, image decode,
/// and aspect-corrected downscaling to character-grid resolution.
pub mod decode;
pub mod fetch;
pub mod resize;

use gc_core::error::ConvertError;
use gc_core::frame::PixelBuffer;

/// Fetch and decode a source identifier (file path or http(s) URL)
/// into an RGBA pixel buffer at native resolution.
///
/// # Errors
/// Returns `ConvertError::ImageLoad` if the resource cannot be
/// fetched or decoded.
pub fn load_source(source: &str) -> Result<PixelBuffer, ConvertError> {
    let bytes = fetch::fetch_bytes(source)?;
    decode::decode(source, &bytes)
}
