use crate::error::ConvertError;

/// Decoded pixel surface. Pixels en RGBA row-major, 4 bytes par pixel.
///
/// One buffer is allocated per conversion and discarded with it; no
/// state is shared between conversions.
///
/// # Example
/// ```
/// use gc_core::frame::PixelBuffer;
/// let buf = PixelBuffer::new(10, 10);
/// assert_eq!(buf.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer at the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA byte vector.
    ///
    /// # Errors
    /// Returns `ConvertError::SurfaceUnavailable` if the byte length
    /// does not match `width * height * 4`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ConvertError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ConvertError::SurfaceUnavailable {
                reason: format!(
                    "buffer length {} does not match {width}×{height} RGBA ({expected})",
                    data.len()
                ),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Read pixel (x, y) → (r, g, b, a).
    ///
    /// # Errors
    /// Returns `ConvertError::PixelAccess` for reads outside the
    /// surface. The caller abandons the whole conversion on failure.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Result<(u8, u8, u8, u8), ConvertError> {
        if x >= self.width || y >= self.height {
            return Err(ConvertError::PixelAccess(format!(
                "read at ({x}, {y}) outside {}×{} surface",
                self.width, self.height
            )));
        }
        let idx = ((y * self.width + x) * 4) as usize;
        match self.data.get(idx..idx + 4) {
            Some(px) => Ok((px[0], px[1], px[2], px[3])),
            None => Err(ConvertError::PixelAccess(format!(
                "truncated pixel data at ({x}, {y})"
            ))),
        }
    }
}

/// Output grid size in character cells. Computed once per conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in character cells.
    pub width: u32,
    /// Height in character cells.
    pub height: u32,
}

/// Single cell in the output grid: one glyph, one RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtCell {
    /// Glyph drawn from the ramp.
    pub ch: char,
    /// Foreground color of the source pixel (RGB).
    pub fg: (u8, u8, u8),
}

impl Default for ArtCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: (0, 0, 0),
        }
    }
}

/// Character-art output grid. Flat array of cells, row-major.
///
/// Produced whole or not at all; owned solely by the caller that
/// requested the conversion.
///
/// # Example
/// ```
/// use gc_core::frame::{ArtCell, ArtGrid};
/// let grid = ArtGrid::new(80, 24);
/// assert_eq!(grid.cells.len(), 80 * 24);
/// assert_eq!(grid.get(0, 0).ch, ' ');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<ArtCell>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl ArtGrid {
    /// Create a blank grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![ArtCell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Cell at position (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &ArtCell {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// One row of cells.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[inline]
    #[must_use]
    pub fn row(&self, y: u32) -> &[ArtCell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ArtCell]> {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Grid size in character cells.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_roundtrip() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.data[4] = 10;
        buf.data[5] = 20;
        buf.data[6] = 30;
        buf.data[7] = 255;
        assert_eq!(buf.pixel(1, 0).unwrap(), (10, 20, 30, 255));
    }

    #[test]
    fn pixel_out_of_bounds() {
        let buf = PixelBuffer::new(2, 2);
        assert!(matches!(
            buf.pixel(2, 0),
            Err(ConvertError::PixelAccess(_))
        ));
        assert!(matches!(
            buf.pixel(0, 2),
            Err(ConvertError::PixelAccess(_))
        ));
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(vec![0u8; 16], 2, 2).is_ok());
        assert!(PixelBuffer::from_raw(vec![0u8; 15], 2, 2).is_err());
    }

    #[test]
    fn grid_rows_are_row_major() {
        let mut grid = ArtGrid::new(3, 2);
        grid.cells[3] = ArtCell {
            ch: '#',
            fg: (1, 2, 3),
        };
        assert_eq!(grid.row(1)[0].ch, '#');
        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.row(0).len(), 3);
    }

    #[test]
    fn buffer_length_is_widened_before_multiplying() {
        // Same arithmetic as from_raw: usize, not u32.
        let buf = PixelBuffer::new(1 << 12, 1 << 10);
        assert_eq!(buf.data.len(), (1usize << 12) * (1usize << 10) * 4);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn grid_get_out_of_bounds_panics() {
        let grid = ArtGrid::new(3, 2);
        let _ = grid.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "range end index")]
    fn grid_row_out_of_bounds_panics() {
        let grid = ArtGrid::new(3, 2);
        let _ = grid.row(2);
    }

    #[test]
    fn dims_match_grid() {
        let grid = ArtGrid::new(7, 5);
        assert_eq!(
            grid.dims(),
            Dimensions {
                width: 7,
                height: 5
            }
        );
    }
}
