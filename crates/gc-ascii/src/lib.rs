/// Quantizer/mapper for glyphcast.
///
/// Converts sampled pixel buffers to glyph/color grids.
pub mod luminance;
pub mod quantize;

pub use quantize::quantize;
