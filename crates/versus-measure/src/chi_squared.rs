//! Squared L2 (χ²) family
//!
//! Sums of squared differences `(P - Q)²`, weighted per bin.

use versus_core::{Result, scalar, vector};

fn squared_diff(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    Ok(vector::square(&vector::sub(p, q)?))
}

/// Squared Euclidean: `Σ(P - Q)²`
pub fn squared_euclidean(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&squared_diff(p, q)?))
}

/// Pearson χ²: `Σ((P - Q)² / Q)`
pub fn pearson_chi_squared(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::div(&squared_diff(p, q)?, q)?))
}

/// Neyman χ²: `Σ((P - Q)² / P)`
pub fn neyman_chi_squared(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::div(&squared_diff(p, q)?, p)?))
}

/// Squared χ²: `Σ((P - Q)² / (P + Q))`
pub fn squared_chi_squared(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    Ok(vector::sum(&vector::div(&squared_diff(p, q)?, &total)?))
}

/// Probabilistic symmetric χ²: `2Σ((P - Q)² / (P + Q))`
pub fn probabilistic_symmetric_chi_squared(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    let ratio = vector::div(&squared_diff(p, q)?, &total)?;
    Ok(scalar::mult(2.0, vector::sum(&ratio)))
}

/// Divergence: `2Σ((P - Q)² / (P + Q)²)`
pub fn divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::square(&vector::add(p, q)?);
    let ratio = vector::div(&squared_diff(p, q)?, &total)?;
    Ok(scalar::mult(2.0, vector::sum(&ratio)))
}

/// Clark: `sqrt(Σ(|P - Q| / (P + Q))²)`
pub fn clark(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    let ratio = vector::abs_sub_div(p, q, &total)?;
    Ok(scalar::sqrt(vector::sum(&vector::square(&ratio))))
}

/// Additive symmetric χ²: `Σ((P - Q)²(P + Q) / PQ)`
pub fn additive_symmetric_chi_squared(p: &[f64], q: &[f64]) -> Result<f64> {
    let weighted = vector::mult(&squared_diff(p, q)?, &vector::add(p, q)?)?;
    let ratio = vector::div(&weighted, &vector::mult(p, q)?)?;
    Ok(vector::sum(&ratio))
}
