//! Fidelity (squared-chord) family
//!
//! Measures built on the Bhattacharyya coefficient `Σsqrt(PQ)` or on the
//! squared chord `(sqrt(P) - sqrt(Q))²`. The coefficient is at most one
//! for PDFs; [`hellinger_alt`] and [`matusita_alt`] clamp `1 - coefficient`
//! at zero so that rounding on near-identical inputs never reaches a
//! negative square root.

use versus_core::{Result, scalar, vector};

fn coefficient(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::sqrt(&vector::mult(p, q)?)))
}

fn chord_sum(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::sub(&vector::sqrt(p), &vector::sqrt(q))?;
    Ok(vector::sum(&vector::square(&diff)))
}

/// Fidelity similarity (Bhattacharyya coefficient): `Σsqrt(PQ)`
pub fn fidelity(p: &[f64], q: &[f64]) -> Result<f64> {
    coefficient(p, q)
}

/// Bhattacharyya distance: `-ln(Σsqrt(PQ))`
pub fn bhattacharyya(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(scalar::neg_ln(coefficient(p, q)?))
}

/// Hellinger distance: `sqrt(2Σ(sqrt(P) - sqrt(Q))²)`
pub fn hellinger(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(scalar::sqrt(scalar::mult(2.0, chord_sum(p, q)?)))
}

/// Hellinger distance, coefficient form: `2·sqrt(1 - Σsqrt(PQ))`
pub fn hellinger_alt(p: &[f64], q: &[f64]) -> Result<f64> {
    let gap = scalar::sub(1.0, coefficient(p, q)?).max(0.0);
    Ok(scalar::mult(2.0, scalar::sqrt(gap)))
}

/// Matusita distance: `sqrt(Σ(sqrt(P) - sqrt(Q))²)`
pub fn matusita(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(scalar::sqrt(chord_sum(p, q)?))
}

/// Matusita distance, coefficient form: `sqrt(2 - 2Σsqrt(PQ))`
pub fn matusita_alt(p: &[f64], q: &[f64]) -> Result<f64> {
    let gap = scalar::sub(2.0, scalar::mult(2.0, coefficient(p, q)?)).max(0.0);
    Ok(scalar::sqrt(gap))
}

/// Squared-chord distance: `Σ(sqrt(P) - sqrt(Q))²`
pub fn squared_chord(p: &[f64], q: &[f64]) -> Result<f64> {
    chord_sum(p, q)
}

/// Squared-chord similarity: `2Σsqrt(PQ) - 1`
pub fn squared_chord_similarity(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(scalar::sub(scalar::mult(2.0, coefficient(p, q)?), 1.0))
}
