//! Combination family
//!
//! Measures mixing ideas from the other families.

use versus_core::{Result, scalar, vector};

/// Taneja: `Σ((P + Q) / 2)·ln((P + Q) / (2·sqrt(PQ)))`
pub fn taneja(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    let geometric = vector::mult_scalar(&vector::sqrt(&vector::mult(p, q)?), 2.0);
    let log_ratio = vector::ln(&vector::div(&total, &geometric)?);
    let mean = vector::div_scalar(&total, 2.0);
    Ok(vector::sum(&vector::mult(&mean, &log_ratio)?))
}

/// Kumar-Johnson: `Σ((P² - Q²)² / (2·sqrt(root(PQ, 3))))`
///
/// The cube root is the Newton iteration of
/// [`scalar::root`](versus_core::scalar::root).
pub fn kumar_johnson(p: &[f64], q: &[f64]) -> Result<f64> {
    let spread = vector::square(&vector::sub(&vector::square(p), &vector::square(q))?);
    let scale = vector::mult_scalar(&vector::sqrt(&vector::root(&vector::mult(p, q)?, 3)), 2.0);
    Ok(vector::sum(&vector::div(&spread, &scale)?))
}

/// Average of city block and Chebyshev: `(Σ|P - Q| + max|P - Q|) / 2`
pub fn avg_l1_linf(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::abs_sub(p, q)?;
    let l1 = vector::sum(&diff);
    let linf = vector::max_value(&diff).unwrap_or(0.0);
    Ok(scalar::div(scalar::add(l1, linf), 2.0))
}
