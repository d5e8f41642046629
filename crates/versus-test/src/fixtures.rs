//! Canonical inputs shared by the regression tests
//!
//! Histograms are 8-bin PDFs (each sums to one). Label maps are small
//! single-band [`PixelArray`]s with `0` as background.

use crate::error::TestResult;
use versus_core::PixelArray;

/// Reference 8-bin PDF
pub const HISTOGRAM_P: [f64; 8] = [0.05, 0.10, 0.20, 0.25, 0.15, 0.10, 0.10, 0.05];

/// Comparison 8-bin PDF, a shifted version of [`HISTOGRAM_P`]
pub const HISTOGRAM_Q: [f64; 8] = [0.10, 0.10, 0.15, 0.20, 0.20, 0.10, 0.05, 0.10];

/// Uniform PDF with `n` bins
pub fn uniform_pdf(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

/// Two orthogonal unit vectors `[1,0,0,0]` and `[0,1,0,0]`
pub fn orthogonal_pair() -> (Vec<f64>, Vec<f64>) {
    (vec![1.0, 0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0, 0.0])
}

/// Single-band label map from rows of values
pub fn label_map(rows: &[&[f64]]) -> TestResult<PixelArray> {
    let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    Ok(PixelArray::from_rows(&rows)?)
}

/// `[[1,1],[2,2]]`: two horizontal regions
pub fn two_region_map() -> TestResult<PixelArray> {
    label_map(&[&[1.0, 1.0], &[2.0, 2.0]])
}

/// Constant single-band `rows x cols` array
pub fn filled(rows: usize, cols: usize, value: f64) -> TestResult<PixelArray> {
    Ok(PixelArray::new_with_value(rows, cols, 1, value)?)
}

/// Binary checkerboard with `1` at (0, 0)
pub fn checkerboard(rows: usize, cols: usize) -> TestResult<PixelArray> {
    let data = (0..rows * cols)
        .map(|i| if (i / cols + i % cols) % 2 == 0 { 1.0 } else { 0.0 })
        .collect();
    Ok(PixelArray::from_data(rows, cols, 1, data)?)
}
