/// Configuration, types, and shared structures for glyphcast.
///
/// This crate contains the types shared across the glyphcast
/// workspace: the glyph ramp, pixel and grid buffers, the error
/// taxonomy, and conversion options.
pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;

pub use config::ConvertOptions;
pub use error::ConvertError;
pub use frame::{ArtCell, ArtGrid, Dimensions, PixelBuffer};
pub use ramp::CharRamp;
