/// Perceptual luminance of an RGB sample.
///
/// Uses the weights `0.21 R + 0.72 G + 0.07 B`. These are NOT the
/// ITU-R BT.601 (0.299/0.587/0.114) or BT.709 coefficients; they are
/// part of the output contract — substituting a standard set changes
/// glyph selection. Evaluated left-to-right in f64 so that pure white
/// sums to exactly 255.0. Alpha is ignored: every pixel is treated as
/// opaque.
///
/// # Example
/// ```
/// use gc_ascii::luminance::perceptual_gray;
/// assert_eq!(perceptual_gray(0, 0, 0), 0.0);
/// assert_eq!(perceptual_gray(255, 255, 255), 255.0);
/// ```
#[inline]
#[must_use]
pub fn perceptual_gray(r: u8, g: u8, b: u8) -> f64 {
    0.21 * f64::from(r) + 0.72 * f64::from(g) + 0.07 * f64::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_zero() {
        assert_eq!(perceptual_gray(0, 0, 0), 0.0);
    }

    #[test]
    fn white_is_exactly_255() {
        // Depends on f64 evaluation order; see the doc comment.
        assert_eq!(perceptual_gray(255, 255, 255), 255.0);
    }

    #[test]
    fn mid_gray_is_exactly_128() {
        assert_eq!(perceptual_gray(128, 128, 128), 128.0);
    }

    #[test]
    fn green_dominates() {
        let green = perceptual_gray(0, 200, 0);
        let red = perceptual_gray(200, 0, 0);
        let blue = perceptual_gray(0, 0, 200);
        assert!(green > red && red > blue);
    }
}
