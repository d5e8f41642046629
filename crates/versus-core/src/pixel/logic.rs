//! Boolean algebra on pixel arrays
//!
//! Every operation first coerces its operands through [`PixelArray::logical`],
//! so any array (label map, grayscale image) can take part. Results are
//! always binary: each value is `0.0` or `1.0`.
//!
//! Binary operations require operands with identical rows, cols and bands.

use super::{PixelArray, trunc_int};
use crate::error::Result;

#[inline]
fn is_on(v: f64) -> bool {
    trunc_int(v) > 0
}

#[inline]
fn from_bool(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

impl PixelArray {
    /// Threshold to a binary array: `1` where the integer-truncated value is
    /// positive, `0` elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use versus_core::PixelArray;
    ///
    /// let pa = PixelArray::from_rows(&[vec![3.0, 0.0, 0.5, -2.0]]).unwrap();
    /// assert_eq!(pa.logical().as_slice(), &[1.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn logical(&self) -> PixelArray {
        self.map_values(|v| from_bool(is_on(v)))
    }

    /// Logical AND of two arrays.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::BandMismatch` if the
    /// shapes differ.
    pub fn and(&self, other: &PixelArray) -> Result<PixelArray> {
        self.zip_values(other, |a, b| from_bool(is_on(a) && is_on(b)))
    }

    /// Logical OR of two arrays.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::BandMismatch` if the
    /// shapes differ.
    pub fn or(&self, other: &PixelArray) -> Result<PixelArray> {
        self.zip_values(other, |a, b| from_bool(is_on(a) || is_on(b)))
    }

    /// Logical negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> PixelArray {
        self.map_values(|v| from_bool(!is_on(v)))
    }

    /// `not(and(self, other))`
    ///
    /// # Errors
    ///
    /// Same as [`and`](Self::and).
    pub fn and_not(&self, other: &PixelArray) -> Result<PixelArray> {
        Ok(self.and(other)?.not())
    }

    /// True if every value is exactly `0.0` or `1.0`
    pub fn is_binary(&self) -> bool {
        self.as_slice().iter().all(|&v| v == 0.0 || v == 1.0)
    }
}
