//! Arithmetic, flattening and masking on pixel arrays

use super::{PixelArray, trunc_int};
use crate::error::Result;

impl PixelArray {
    /// Elementwise sum of the integer-truncated values.
    ///
    /// `1.7 + 2.6` yields `3.0`, not `4.3`: pixel values are combined as
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::BandMismatch` if the
    /// shapes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &PixelArray) -> Result<PixelArray> {
        self.zip_values(other, |a, b| trunc_int(a) as f64 + trunc_int(b) as f64)
    }

    /// Sum of all values over every (row, col, band)
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().sum()
    }

    /// Flatten in row-major order (row, then col, then band)
    pub fn vectorize(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Number of non-zero values
    pub fn count_nonzero(&self) -> usize {
        self.as_slice().iter().filter(|&&v| v != 0.0).count()
    }

    /// Binary array marking positions whose truncated value equals the
    /// truncated `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use versus_core::PixelArray;
    ///
    /// let labels = PixelArray::from_rows(&[vec![1.0, 2.0, 2.4, 0.0]]).unwrap();
    /// assert_eq!(labels.match_value(2.0).as_slice(), &[0.0, 1.0, 1.0, 0.0]);
    /// ```
    pub fn match_value(&self, value: f64) -> PixelArray {
        let target = trunc_int(value);
        self.map_values(|v| if trunc_int(v) == target { 1.0 } else { 0.0 })
    }

    /// Collect the values of `self` at positions where `mask` is exactly `1`.
    ///
    /// Traversal is column-major: col outer, row inner, band innermost.
    /// Two arrays masked with the same mask therefore produce vectors whose
    /// k-th entries refer to the same position.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::BandMismatch` if the
    /// mask shape differs from `self`.
    pub fn mask(&self, mask: &PixelArray) -> Result<Vec<f64>> {
        self.check_same_dimensions(mask)?;

        let (rows, cols, bands) = self.dimensions();
        let data = self.as_slice();
        let mask_data = mask.as_slice();

        let mut out = Vec::new();
        for col in 0..cols {
            for row in 0..rows {
                let base = (row * cols + col) * bands;
                for i in base..base + bands {
                    if mask_data[i] == 1.0 {
                        out.push(data[i]);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Combine bands per pixel by summing them: a `rows x cols x 1` array
    pub fn combined_values(&self) -> PixelArray {
        let (rows, cols, _) = self.dimensions();
        let data = self
            .as_slice()
            .chunks(self.bands())
            .map(|pixel| pixel.iter().sum())
            .collect();
        PixelArray {
            rows,
            cols,
            bands: 1,
            data,
        }
    }
}
