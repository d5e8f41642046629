//! Vector algebra over histogram-like `f64` slices
//!
//! Vectors are plain `&[f64]` slices: a histogram, a PDF, or one flattened
//! pixel channel. Every function here is pure and returns a freshly
//! allocated `Vec<f64>` (or a scalar reduction).
//!
//! Operand forms are spelled out in the function name instead of being
//! overloaded:
//!
//! - vector ⊕ vector: [`add`], [`sub`], [`mult`], [`div`], ...; both
//!   operands must have the same length, otherwise
//!   [`Error::LengthMismatch`](crate::Error::LengthMismatch)
//! - vector ⊕ scalar: [`add_scalar`], [`sub_scalar`], [`mult_scalar`],
//!   [`div_scalar`]
//! - scalar ⊕ vector: [`scalar_sub`], [`scalar_div`]
//!
//! Elementwise results follow the [`scalar`](crate::scalar) edge-case
//! policy, so [`div`] and [`ln`] never produce errors or infinities for
//! zero operands.
//!
//! # Examples
//!
//! ```
//! use versus_core::vector;
//!
//! let p = [0.5, 0.0, 0.5];
//! let q = [0.25, 0.0, 0.75];
//! let d = vector::abs_sub(&p, &q).unwrap();
//! assert_eq!(vector::sum(&d), 0.5);
//! assert_eq!(vector::div(&p, &p).unwrap(), vec![1.0, 0.0, 1.0]);
//! ```

mod arith;

pub use arith::{
    abs_add, abs_max, abs_min, abs_sub, abs_sub_div, abs_sub_power, abs_sub_squared, add,
    add_scalar, div, div_scalar, ln, max, min, mult, mult_scalar, root, scalar_div, scalar_sub,
    sqrt, square, sub, sub_scalar,
};

use crate::error::{Error, Result};

/// Check that two vectors have the same length.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] naming `p`'s length as the expected one.
pub fn check_same_len(p: &[f64], q: &[f64]) -> Result<()> {
    if p.len() != q.len() {
        return Err(Error::LengthMismatch {
            expected: p.len(),
            actual: q.len(),
        });
    }
    Ok(())
}

/// Arithmetic sum of all elements. `0` for an empty vector.
pub fn sum(p: &[f64]) -> f64 {
    p.iter().sum()
}

/// Largest element, or `None` for an empty vector.
pub fn max_value(p: &[f64]) -> Option<f64> {
    p.iter().copied().reduce(f64::max)
}

/// Scale a histogram so that it sums to one.
///
/// Each bin is divided by the total under the
/// [`scalar::div`](crate::scalar::div) policy, so an all-zero histogram
/// stays all-zero.
///
/// # Examples
///
/// ```
/// use versus_core::vector;
///
/// let pdf = vector::normalize(&[2.0, 6.0, 0.0]);
/// assert_eq!(pdf, vec![0.25, 0.75, 0.0]);
/// ```
pub fn normalize(p: &[f64]) -> Vec<f64> {
    let total = sum(p);
    div_scalar(p, total)
}
