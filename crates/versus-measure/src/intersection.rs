//! Intersection family
//!
//! Built around the bin-wise overlap `min(P, Q)`. Similarities and their
//! distance counterparts are computed independently: `czekanowski` and
//! `czekanowski_complement` sum to one only up to rounding.

use versus_core::{Result, scalar, vector};

/// Intersection similarity: `Σmin(P, Q)`
pub fn intersection(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::min(p, q)?))
}

/// Intersection distance: `Σ|P - Q| / 2`
pub fn intersection_complement(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::sum(&vector::abs_sub(p, q)?);
    Ok(scalar::mult_by_reciprocal(diff, 2.0))
}

/// Wave Hedges: `Σ(1 - min(P, Q) / max(P, Q))`
///
/// A bin that is empty in both inputs contributes `1`, since `0/0 = 0`.
pub fn wave_hedges(p: &[f64], q: &[f64]) -> Result<f64> {
    let ratio = vector::div(&vector::min(p, q)?, &vector::max(p, q)?)?;
    Ok(vector::sum(&vector::scalar_sub(1.0, &ratio)))
}

/// Wave Hedges, second form: `Σ(|P - Q| / max(P, Q))`
pub fn wave_hedges_alt(p: &[f64], q: &[f64]) -> Result<f64> {
    let max = vector::max(p, q)?;
    Ok(vector::sum(&vector::abs_sub_div(p, q, &max)?))
}

/// Czekanowski similarity: `2Σmin(P, Q) / Σ(P + Q)`
pub fn czekanowski(p: &[f64], q: &[f64]) -> Result<f64> {
    let overlap = scalar::mult(2.0, vector::sum(&vector::min(p, q)?));
    let total = vector::sum(&vector::add(p, q)?);
    Ok(scalar::div(overlap, total))
}

/// Czekanowski distance: `Σ|P - Q| / Σ(P + Q)`
pub fn czekanowski_complement(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::sum(&vector::abs_sub(p, q)?);
    let total = vector::sum(&vector::add(p, q)?);
    Ok(scalar::div(diff, total))
}

/// Motyka similarity: `Σmin(P, Q) / Σ(P + Q)`
pub fn motyka(p: &[f64], q: &[f64]) -> Result<f64> {
    let overlap = vector::sum(&vector::min(p, q)?);
    let total = vector::sum(&vector::add(p, q)?);
    Ok(scalar::div(overlap, total))
}

/// Motyka distance: `Σmax(P, Q) / Σ(P + Q)`
pub fn motyka_complement(p: &[f64], q: &[f64]) -> Result<f64> {
    let cover = vector::sum(&vector::max(p, q)?);
    let total = vector::sum(&vector::add(p, q)?);
    Ok(scalar::div(cover, total))
}

/// Kulczynski similarity: `Σmin(P, Q) / Σ|P - Q|`
///
/// Identical inputs give `x / 0`, i.e. `MIN_VALUE`.
pub fn kulczynski_s(p: &[f64], q: &[f64]) -> Result<f64> {
    let overlap = vector::sum(&vector::min(p, q)?);
    let diff = vector::sum(&vector::abs_sub(p, q)?);
    Ok(scalar::div(overlap, diff))
}

/// Ruzicka similarity: `Σmin(P, Q) / Σmax(P, Q)`
pub fn ruzicka(p: &[f64], q: &[f64]) -> Result<f64> {
    let overlap = vector::sum(&vector::min(p, q)?);
    let cover = vector::sum(&vector::max(p, q)?);
    Ok(scalar::div(overlap, cover))
}

/// Tanimoto distance: `(ΣP + ΣQ - 2Σmin(P, Q)) / (ΣP + ΣQ - Σmin(P, Q))`
pub fn tanimoto(p: &[f64], q: &[f64]) -> Result<f64> {
    let overlap = vector::sum(&vector::min(p, q)?);
    let sum_p = vector::sum(p);
    let sum_q = vector::sum(q);
    let num = sum_p + sum_q - scalar::mult(2.0, overlap);
    let den = sum_p + sum_q - overlap;
    Ok(scalar::div(num, den))
}

/// Tanimoto distance, second form: `Σ(max(P, Q) - min(P, Q)) / Σmax(P, Q)`
pub fn tanimoto_alt(p: &[f64], q: &[f64]) -> Result<f64> {
    let max = vector::max(p, q)?;
    let min = vector::min(p, q)?;
    let spread = vector::sum(&vector::sub(&max, &min)?);
    Ok(scalar::div(spread, vector::sum(&max)))
}
