//! Pixel-based measures
//!
//! These compare two images position by position instead of through
//! histograms. Multi-band pixels are first combined into one value per
//! position by summing their bands
//! ([`PixelArray::combined_values`]).

use versus_core::{PixelArray, Result, scalar};

/// Default search radius for [`pixel_correspondence`]
pub const DEFAULT_CORRESPONDENCE_RADIUS: usize = 2;

/// Mean squared error of the combined pixel values:
/// `Σ(x - y)² / (rows · cols)`
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if the arrays differ in rows or cols.
/// Band counts may differ.
///
/// # Examples
///
/// ```
/// use versus_core::PixelArray;
/// use versus_measure::pixel::mean_squared_error;
///
/// let a = PixelArray::from_rows(&[vec![1.0, 2.0]]).unwrap();
/// let b = PixelArray::from_rows(&[vec![1.0, 4.0]]).unwrap();
/// assert_eq!(mean_squared_error(&a, &b).unwrap(), 2.0);
/// ```
pub fn mean_squared_error(a: &PixelArray, b: &PixelArray) -> Result<f64> {
    a.check_same_size(b)?;

    let x = a.combined_values();
    let y = b.combined_values();
    let total: f64 = x
        .as_slice()
        .iter()
        .zip(y.as_slice())
        .map(|(&xv, &yv)| scalar::square(scalar::sub(xv, yv)))
        .sum();

    let size = scalar::mult(a.rows() as f64, a.cols() as f64);
    Ok(scalar::mult_by_reciprocal(total, size))
}

/// Pixel correspondence metric (PCM), as a percentage.
///
/// Each pixel of `a` is matched to the closest-valued pixel of `b` within
/// a `(2 * radius + 1)` square window around the same position (clipped at
/// the image border). The summed match cost is normalized by the size of
/// the union of the two foregrounds (positions whose combined value is
/// `1`):
///
/// ```text
/// PCM = 100 · (1 - cost / |A ∪ B|)
/// ```
///
/// Identical images score `100`.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if the arrays differ in rows or cols.
pub fn pixel_correspondence(a: &PixelArray, b: &PixelArray, radius: usize) -> Result<f64> {
    a.check_same_size(b)?;

    let (rows, cols, _) = a.dimensions();
    let x = a.combined_values();
    let y = b.combined_values();
    let xs = x.as_slice();
    let ys = y.as_slice();

    let mut cost = 0.0;
    for row in 0..rows {
        let r0 = row.saturating_sub(radius);
        let r1 = row.saturating_add(radius).min(rows - 1);
        for col in 0..cols {
            let c0 = col.saturating_sub(radius);
            let c1 = col.saturating_add(radius).min(cols - 1);
            let xv = xs[row * cols + col];

            let mut best = f64::INFINITY;
            for k in r0..=r1 {
                for l in c0..=c1 {
                    best = best.min(scalar::abs_sub(xv, ys[k * cols + l]));
                }
            }
            cost += best;
        }
    }

    let in_a = xs.iter().filter(|&&v| v == 1.0).count();
    let in_b = ys.iter().filter(|&&v| v == 1.0).count();
    let in_both = xs
        .iter()
        .zip(ys)
        .filter(|&(&xv, &yv)| xv == 1.0 && yv == 1.0)
        .count();
    let union = (in_a + in_b - in_both) as f64;

    Ok(scalar::mult(100.0, scalar::sub(1.0, scalar::div(cost, union))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use versus_core::Error;

    #[test]
    fn test_mse_identical() {
        let a = PixelArray::from_rows(&[vec![3.0, 1.0], vec![0.0, 7.0]]).unwrap();
        assert_eq!(mean_squared_error(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_combines_bands() {
        // Combined: [3, 0] vs [1, 2]
        let a = PixelArray::from_nested(&[vec![vec![1.0, 2.0], vec![0.0, 0.0]]]).unwrap();
        let b = PixelArray::from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(mean_squared_error(&a, &b).unwrap(), (4.0 + 4.0) / 2.0);
    }

    #[test]
    fn test_mse_size_mismatch() {
        let a = PixelArray::new(2, 2, 1).unwrap();
        let b = PixelArray::new(2, 3, 1).unwrap();
        assert!(matches!(
            mean_squared_error(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_pcm_identical_is_100() {
        let a = PixelArray::from_rows(&[vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]]).unwrap();
        assert_eq!(pixel_correspondence(&a, &a, 2).unwrap(), 100.0);
        let blank = PixelArray::new(3, 3, 1).unwrap();
        assert_eq!(pixel_correspondence(&blank, &blank, 1).unwrap(), 100.0);
    }

    #[test]
    fn test_pcm_shift_within_radius() {
        // One foreground pixel moved by one column
        let a = PixelArray::from_rows(&[vec![1.0, 0.0, 0.0]]).unwrap();
        let b = PixelArray::from_rows(&[vec![0.0, 1.0, 0.0]]).unwrap();
        assert_eq!(pixel_correspondence(&a, &b, 1).unwrap(), 100.0);
        // Out of reach with radius 0: two mismatched positions over a union of 2
        assert_eq!(pixel_correspondence(&a, &b, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_pcm_radius_saturates_at_border() {
        let a = PixelArray::from_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 2.0]]).unwrap();
        let b = PixelArray::from_rows(&[vec![0.0, 1.0, 0.0], vec![3.0, 0.0, 0.0]]).unwrap();
        let whole = pixel_correspondence(&a, &b, 3).unwrap();
        assert_eq!(pixel_correspondence(&a, &b, usize::MAX).unwrap(), whole);
        assert_eq!(pixel_correspondence(&a, &a, usize::MAX).unwrap(), 100.0);
    }
}
