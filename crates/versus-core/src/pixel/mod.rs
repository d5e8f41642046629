//! PixelArray - 3-D numeric image array
//!
//! `PixelArray` holds `values[row][col][band]` as `f64`, the form in which
//! both continuous images and integer label maps reach the comparison
//! measures. Dimensions are fixed at construction.
//!
//! Operations are split by concern:
//!
//! - [`logic`]: thresholding and boolean algebra (`logical`, `and`, `or`,
//!   `not`, `and_not`)
//! - [`arith`]: integer-valued addition, sums, flattening, value matching,
//!   masking and band combination
//! - [`labels`]: distinct-value discovery for label maps
//!
//! # Examples
//!
//! ```
//! use versus_core::PixelArray;
//!
//! let labels = PixelArray::from_rows(&[vec![1.0, 1.0], vec![2.0, 0.0]]).unwrap();
//! assert_eq!(labels.dimensions(), (2, 2, 1));
//! assert_eq!(labels.get(1, 0, 0), Some(2.0));
//!
//! let binary = labels.logical();
//! assert_eq!(binary.sum(), 3.0);
//! ```

pub mod arith;
pub mod labels;
pub mod logic;

pub use labels::unique_sort;

use crate::error::{Error, Result};

/// Truncate a pixel value to its integer label, as integer pixel
/// semantics require (`2.7 -> 2`, `-0.5 -> 0`, NaN -> 0).
#[inline]
pub(crate) fn trunc_int(v: f64) -> i64 {
    v as i64
}

/// 3-D numeric array indexed by `(row, col, band)`
///
/// # Memory Layout
///
/// Data is stored row-major with the band index innermost: the value at
/// `(row, col, band)` is at index `(row * cols + col) * bands + band`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelArray {
    rows: usize,
    cols: usize,
    bands: usize,
    data: Vec<f64>,
}

impl PixelArray {
    /// Create a new array with all values set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    pub fn new(rows: usize, cols: usize, bands: usize) -> Result<Self> {
        Self::new_with_value(rows, cols, bands, 0.0)
    }

    /// Create a new array with all values set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    pub fn new_with_value(rows: usize, cols: usize, bands: usize, value: f64) -> Result<Self> {
        check_dimensions(rows, cols, bands)?;
        Ok(PixelArray {
            rows,
            cols,
            bands,
            data: vec![value; rows * cols * bands],
        })
    }

    /// Create an array from flat data in row-major, band-innermost order
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is 0 or the data length doesn't match.
    pub fn from_data(rows: usize, cols: usize, bands: usize, data: Vec<f64>) -> Result<Self> {
        check_dimensions(rows, cols, bands)?;

        let expected = rows * cols * bands;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                rows,
                cols,
                bands,
                expected
            )));
        }

        Ok(PixelArray {
            rows,
            cols,
            bands,
            data,
        })
    }

    /// Create an array from nested `values[row][col][band]`
    ///
    /// Dimensions are taken from the shape: `rows = values.len()`,
    /// `cols = values[0].len()`, `bands = values[0][0].len()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for empty input and
    /// `Error::InvalidParameter` for ragged input.
    pub fn from_nested(values: &[Vec<Vec<f64>>]) -> Result<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        let bands = values
            .first()
            .and_then(|row| row.first())
            .map_or(0, Vec::len);
        check_dimensions(rows, cols, bands)?;

        let mut data = Vec::with_capacity(rows * cols * bands);
        for (r, row) in values.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            for (c, pixel) in row.iter().enumerate() {
                if pixel.len() != bands {
                    return Err(Error::InvalidParameter(format!(
                        "pixel ({}, {}) has {} bands, expected {}",
                        r,
                        c,
                        pixel.len(),
                        bands
                    )));
                }
                data.extend_from_slice(pixel);
            }
        }

        Ok(PixelArray {
            rows,
            cols,
            bands,
            data,
        })
    }

    /// Create a single-band array from `values[row][col]`
    ///
    /// Convenient for label maps and binary masks.
    ///
    /// # Errors
    ///
    /// Same as [`PixelArray::from_nested`].
    pub fn from_rows(values: &[Vec<f64>]) -> Result<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        check_dimensions(rows, cols, 1)?;

        let mut data = Vec::with_capacity(rows * cols);
        for (r, row) in values.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(PixelArray {
            rows,
            cols,
            bands: 1,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Get the dimensions as (rows, cols, bands)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.bands)
    }

    /// Total number of values (`rows * cols * bands`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a constructed array has at least one value
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value, or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize, band: usize) -> Option<f64> {
        self.offset(row, col, band).map(|i| self.data[i])
    }

    /// Get a value truncated to an integer, or `None` if out of bounds
    pub fn get_int(&self, row: usize, col: usize, band: usize) -> Option<i64> {
        self.get(row, col, band).map(trunc_int)
    }

    /// Set a value
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the position is outside the array.
    pub fn set(&mut self, row: usize, col: usize, band: usize, value: f64) -> Result<()> {
        match self.offset(row, col, band) {
            Some(i) => {
                self.data[i] = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index: row
                    .saturating_mul(self.cols)
                    .saturating_add(col)
                    .saturating_mul(self.bands)
                    .saturating_add(band),
                len: self.data.len(),
            }),
        }
    }

    /// Get the underlying data (row-major, band innermost)
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert back to nested `values[row][col][band]`
    pub fn to_nested(&self) -> Vec<Vec<Vec<f64>>> {
        self.data
            .chunks(self.cols * self.bands)
            .map(|row| row.chunks(self.bands).map(<[f64]>::to_vec).collect())
            .collect()
    }

    /// True iff row and column counts match; band counts are not compared.
    pub fn same_size(&self, other: &PixelArray) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Require matching rows and cols.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if [`same_size`](Self::same_size)
    /// is false.
    pub fn check_same_size(&self, other: &PixelArray) -> Result<()> {
        if !self.same_size(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.rows, self.cols),
                actual: (other.rows, other.cols),
            });
        }
        Ok(())
    }

    /// Require matching rows, cols and bands.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::BandMismatch`.
    pub fn check_same_dimensions(&self, other: &PixelArray) -> Result<()> {
        self.check_same_size(other)?;
        if self.bands != other.bands {
            return Err(Error::BandMismatch {
                expected: self.bands,
                actual: other.bands,
            });
        }
        Ok(())
    }

    /// New array of the same shape with `f` applied to every value
    pub(crate) fn map_values(&self, f: impl Fn(f64) -> f64) -> PixelArray {
        PixelArray {
            rows: self.rows,
            cols: self.cols,
            bands: self.bands,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// New array combining two same-shaped arrays value by value
    pub(crate) fn zip_values(
        &self,
        other: &PixelArray,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<PixelArray> {
        self.check_same_dimensions(other)?;
        Ok(PixelArray {
            rows: self.rows,
            cols: self.cols,
            bands: self.bands,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    #[inline]
    fn offset(&self, row: usize, col: usize, band: usize) -> Option<usize> {
        if row < self.rows && col < self.cols && band < self.bands {
            Some((row * self.cols + col) * self.bands + band)
        } else {
            None
        }
    }
}

fn check_dimensions(rows: usize, cols: usize, bands: usize) -> Result<()> {
    if rows == 0 || cols == 0 || bands == 0 {
        return Err(Error::InvalidDimension { rows, cols, bands });
    }
    Ok(())
}
