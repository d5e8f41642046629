//! Lp Minkowski family
//!
//! Distances of the form `(Σ|P - Q|^p)^(1/p)` and their limits:
//! city block (`p = 1`), Euclidean (`p = 2`) and Chebyshev (`p → ∞`).

use versus_core::{Error, Result, scalar, vector};

/// Euclidean (L2) distance: `sqrt(Σ(P - Q)²)`
///
/// # Examples
///
/// ```
/// use versus_measure::minkowski::euclidean;
///
/// let d = euclidean(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(d, 2f64.sqrt());
/// ```
pub fn euclidean(p: &[f64], q: &[f64]) -> Result<f64> {
    let squared = vector::abs_sub_squared(p, q)?;
    Ok(scalar::sqrt(vector::sum(&squared)))
}

/// City-block (L1, Manhattan) distance: `Σ|P - Q|`
pub fn city_block(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::abs_sub(p, q)?))
}

/// Minkowski (Lp) distance: `root(Σ|P - Q|^p, p)`
///
/// The root is taken by Newton iteration to a tolerance of `0.001`, so the
/// result is approximate for `power > 1`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `power` is 0, and
/// `Error::LengthMismatch` if the vectors differ in length.
pub fn minkowski(p: &[f64], q: &[f64], power: u32) -> Result<f64> {
    if power == 0 {
        return Err(Error::InvalidParameter(
            "minkowski power must be at least 1".to_string(),
        ));
    }
    let exponent = i32::try_from(power)
        .map_err(|_| Error::InvalidParameter(format!("minkowski power {power} too large")))?;

    let powered = vector::abs_sub_power(p, q, exponent)?;
    Ok(scalar::root(vector::sum(&powered), power))
}

/// Chebyshev (L∞) distance: `max|P - Q|`, `0` for empty vectors
pub fn chebyshev(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::max_value(&vector::abs_sub(p, q)?).unwrap_or(0.0))
}
