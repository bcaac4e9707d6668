use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use gc_core::config::ConvertOptions;
use gc_core::error::ConvertError;
use gc_core::frame::{Dimensions, PixelBuffer};

/// Target geometry for a conversion.
///
/// Never upscales: `scale = max_width / src_width` only when the
/// source is wider than `max_width`, otherwise 1. The height is
/// additionally divided by the inverse character aspect ratio so that
/// glyph cells taller than wide do not stretch the output:
///
/// - `canvas_width  = floor(src_width * scale)`
/// - `canvas_height = floor(src_height * scale / (1 / char_aspect))`
#[must_use]
pub fn target_dimensions(
    src_width: u32,
    src_height: u32,
    max_width: u32,
    char_aspect: f64,
) -> Dimensions {
    let scale = if src_width > max_width {
        f64::from(max_width) / f64::from(src_width)
    } else {
        1.0
    };
    Dimensions {
        width: (f64::from(src_width) * scale).floor() as u32,
        height: (f64::from(src_height) * scale / (1.0 / char_aspect)).floor() as u32,
    }
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// # Example
/// ```
/// use gc_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (the resize API wants `&mut` bytes).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output
    /// size; equal dimensions degrade to a plain copy.
    ///
    /// # Errors
    /// `ConvertError::SurfaceUnavailable` if either buffer cannot back
    /// a resize surface, `ConvertError::PixelAccess` if the resample
    /// itself fails.
    pub fn resize_into(
        &mut self,
        src: &PixelBuffer,
        dst: &mut PixelBuffer,
    ) -> Result<(), ConvertError> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image = Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
            .map_err(|e| ConvertError::SurfaceUnavailable {
                reason: format!("source surface {}×{}: {e}", src.width, src.height),
            })?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4).map_err(
                |e| ConvertError::SurfaceUnavailable {
                    reason: format!("target surface {}×{}: {e}", dst.width, dst.height),
                },
            )?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| ConvertError::PixelAccess(format!("resample failed: {e}")))?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a decoded image down to the character-grid resolution
/// (1 pixel == 1 character cell).
///
/// # Errors
/// `ConvertError::SurfaceUnavailable` when the target geometry has
/// zero area (degenerate sources), otherwise the `Resizer` errors.
pub fn sample(src: &PixelBuffer, opts: &ConvertOptions) -> Result<PixelBuffer, ConvertError> {
    let dims = target_dimensions(src.width, src.height, opts.max_width, opts.char_aspect());
    if dims.width == 0 || dims.height == 0 {
        return Err(ConvertError::SurfaceUnavailable {
            reason: format!(
                "zero-area target {}×{} for {}×{} source",
                dims.width, dims.height, src.width, src.height
            ),
        });
    }
    log::debug!(
        "sampling {}×{} down to {}×{}",
        src.width,
        src.height,
        dims.width,
        dims.height
    );
    let mut dst = PixelBuffer::new(dims.width, dims.height);
    Resizer::new().resize_into(src, &mut dst)?;
    Ok(dst)
}
