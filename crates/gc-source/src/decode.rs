use gc_core::error::ConvertError;
use gc_core::frame::PixelBuffer;

/// Decode fetched bytes into an RGBA pixel buffer.
///
/// The format is sniffed from the bytes (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns `ConvertError::ImageLoad` if the bytes are not a decodable
/// image.
pub fn decode(source: &str, bytes: &[u8]) -> Result<PixelBuffer, ConvertError> {
    let img = image::load_from_memory(bytes).map_err(|e| ConvertError::ImageLoad {
        resource: source.to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {source}: {width}×{height}");
    PixelBuffer::from_raw(rgba.into_raw(), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(px));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_rgba() {
        let bytes = png_bytes(3, 2, [10, 20, 30, 255]);
        let buf = decode("fixture.png", &bytes).unwrap();
        assert_eq!((buf.width, buf.height), (3, 2));
        assert_eq!(buf.pixel(2, 1).unwrap(), (10, 20, 30, 255));
    }

    #[test]
    fn garbage_bytes_are_image_load_error() {
        let err = decode("garbage.bin", b"definitely not an image").unwrap_err();
        assert!(matches!(err, ConvertError::ImageLoad { .. }));
    }
}
