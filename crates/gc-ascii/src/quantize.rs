use gc_core::error::ConvertError;
use gc_core::frame::{ArtCell, ArtGrid, PixelBuffer};
use gc_core::ramp::CharRamp;
use rayon::prelude::*;

use crate::luminance::perceptual_gray;

/// Quantize a sampled pixel buffer into a glyph grid.
///
/// Walks the buffer row-major, one pixel per character cell: computes
/// the perceptual luminance, picks the ramp glyph for it, and carries
/// the pixel's RGB as the cell color. Rows are processed in parallel;
/// the output is identical to a sequential walk.
///
/// All-or-nothing: any pixel read failure aborts the conversion with
/// `ConvertError::PixelAccess` — a partial grid is never returned.
///
/// # Errors
/// Propagates `ConvertError::PixelAccess` from the buffer.
pub fn quantize(frame: &PixelBuffer, ramp: &CharRamp) -> Result<ArtGrid, ConvertError> {
    let rows: Vec<Vec<ArtCell>> = (0..frame.height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(frame.width as usize);
            for x in 0..frame.width {
                let (r, g, b, _a) = frame.pixel(x, y)?;
                let gray = perceptual_gray(r, g, b);
                row.push(ArtCell {
                    ch: ramp.glyph_for(gray),
                    fg: (r, g, b),
                });
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    log::debug!("quantized {}×{} cells", frame.width, frame.height);
    Ok(ArtGrid {
        cells: rows.into_iter().flatten().collect(),
        width: frame.width,
        height: frame.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gc_core::ramp::RAMP_COMPACT;

    fn solid_buffer(width: u32, height: u32, rgb: (u8, u8, u8)) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        for px in buf.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgb.0, rgb.1, rgb.2, 255]);
        }
        buf
    }

    fn compact_ramp() -> CharRamp {
        CharRamp::new(RAMP_COMPACT).unwrap()
    }

    #[test]
    fn grid_matches_buffer_dimensions() {
        let grid = quantize(&solid_buffer(7, 3, (0, 0, 0)), &compact_ramp()).unwrap();
        assert_eq!((grid.width, grid.height), (7, 3));
        assert_eq!(grid.cells.len(), 21);
        assert_eq!(grid.rows().count(), 3);
        assert_eq!(grid.row(0).len(), 7);
    }

    #[test]
    fn black_maps_to_first_glyph() {
        let grid = quantize(&solid_buffer(2, 2, (0, 0, 0)), &compact_ramp()).unwrap();
        assert_eq!(grid.get(0, 0).ch, ' ');
        assert_eq!(grid.get(0, 0).fg, (0, 0, 0));
    }

    #[test]
    fn white_maps_to_last_glyph() {
        let grid = quantize(&solid_buffer(2, 2, (255, 255, 255)), &compact_ramp()).unwrap();
        assert_eq!(grid.get(1, 1).ch, '@');
    }

    #[test]
    fn mid_gray_scenario() {
        // (128,128,128) → gray 128 → floor((128/255)*9) == 4 → '='.
        let grid = quantize(&solid_buffer(1, 2, (128, 128, 128)), &compact_ramp()).unwrap();
        assert_eq!(grid.get(0, 0).ch, '=');
        assert_eq!(grid.get(0, 0).fg, (128, 128, 128));
    }

    #[test]
    fn glyph_index_monotone_in_luminance() {
        let ramp = compact_ramp();
        let glyphs: Vec<char> = RAMP_COMPACT.chars().collect();
        let mut buf = PixelBuffer::new(256, 1);
        for (i, px) in buf.data.chunks_exact_mut(4).enumerate() {
            let v = i as u8;
            px.copy_from_slice(&[v, v, v, 255]);
        }
        let grid = quantize(&buf, &ramp).unwrap();
        let mut prev = 0usize;
        for cell in &grid.cells {
            let idx = glyphs.iter().position(|&c| c == cell.ch).unwrap();
            assert!(idx >= prev);
            prev = idx;
        }
    }

    #[test]
    fn alpha_is_ignored() {
        let mut opaque = solid_buffer(2, 1, (90, 90, 90));
        let mut transparent = solid_buffer(2, 1, (90, 90, 90));
        opaque.data[3] = 255;
        transparent.data[3] = 0;
        let ramp = compact_ramp();
        assert_eq!(
            quantize(&opaque, &ramp).unwrap(),
            quantize(&transparent, &ramp).unwrap()
        );
    }

    #[test]
    fn quantize_is_deterministic() {
        let mut buf = PixelBuffer::new(31, 17);
        for (i, byte) in buf.data.iter_mut().enumerate() {
            *byte = (i * 37 % 251) as u8;
        }
        let ramp = compact_ramp();
        assert_eq!(quantize(&buf, &ramp).unwrap(), quantize(&buf, &ramp).unwrap());
    }

    #[test]
    fn truncated_buffer_is_pixel_access_error() {
        let mut buf = solid_buffer(4, 4, (10, 10, 10));
        buf.data.truncate(buf.data.len() - 2);
        let err = quantize(&buf, &compact_ramp()).unwrap_err();
        assert!(matches!(err, ConvertError::PixelAccess(_)));
    }
}
