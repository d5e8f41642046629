//! Elementwise vector arithmetic.
//!
//! Binary vector-vector functions validate lengths once and then map the
//! matching [`scalar`](crate::scalar) primitive over both slices.

use super::check_same_len;
use crate::error::Result;
use crate::scalar;

fn zip_with(p: &[f64], q: &[f64], f: impl Fn(f64, f64) -> f64) -> Result<Vec<f64>> {
    check_same_len(p, q)?;
    Ok(p.iter().zip(q).map(|(&a, &b)| f(a, b)).collect())
}

fn map_with(p: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    p.iter().map(|&a| f(a)).collect()
}

// ============================================================================
// vector ⊕ vector
// ============================================================================

pub fn add(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::add)
}

pub fn sub(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::sub)
}

pub fn mult(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::mult)
}

/// Elementwise [`scalar::div`]: `0/0 = 0`, `x/0 = MIN_VALUE`.
pub fn div(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::div)
}

pub fn min(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::min)
}

pub fn max(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::max)
}

/// `|min(p, q)|` elementwise
pub fn abs_min(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, |a, b| scalar::min(a, b).abs())
}

/// `|max(p, q)|` elementwise
pub fn abs_max(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, |a, b| scalar::max(a, b).abs())
}

pub fn abs_sub(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::abs_sub)
}

pub fn abs_add(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::abs_add)
}

pub fn abs_sub_squared(p: &[f64], q: &[f64]) -> Result<Vec<f64>> {
    zip_with(p, q, scalar::abs_sub_squared)
}

/// `|p - q|^n` elementwise
pub fn abs_sub_power(p: &[f64], q: &[f64], n: i32) -> Result<Vec<f64>> {
    zip_with(p, q, |a, b| scalar::abs_sub_power(a, b, n))
}

/// `|p - q| / r` elementwise; all three vectors must have equal length.
pub fn abs_sub_div(p: &[f64], q: &[f64], r: &[f64]) -> Result<Vec<f64>> {
    check_same_len(p, q)?;
    check_same_len(p, r)?;
    Ok(p
        .iter()
        .zip(q)
        .zip(r)
        .map(|((&a, &b), &c)| scalar::abs_sub_div(a, b, c))
        .collect())
}

// ============================================================================
// vector ⊕ scalar, scalar ⊕ vector
// ============================================================================

pub fn add_scalar(p: &[f64], v: f64) -> Vec<f64> {
    map_with(p, |a| scalar::add(a, v))
}

/// `p[i] - v`
pub fn sub_scalar(p: &[f64], v: f64) -> Vec<f64> {
    map_with(p, |a| scalar::sub(a, v))
}

/// `v - p[i]`
pub fn scalar_sub(v: f64, p: &[f64]) -> Vec<f64> {
    map_with(p, |a| scalar::sub(v, a))
}

pub fn mult_scalar(p: &[f64], v: f64) -> Vec<f64> {
    map_with(p, |a| scalar::mult(a, v))
}

/// `p[i] / v`
pub fn div_scalar(p: &[f64], v: f64) -> Vec<f64> {
    map_with(p, |a| scalar::div(a, v))
}

/// `v / q[i]`
pub fn scalar_div(v: f64, q: &[f64]) -> Vec<f64> {
    map_with(q, |a| scalar::div(v, a))
}

// ============================================================================
// unary
// ============================================================================

pub fn square(p: &[f64]) -> Vec<f64> {
    map_with(p, scalar::square)
}

pub fn sqrt(p: &[f64]) -> Vec<f64> {
    map_with(p, scalar::sqrt)
}

/// Elementwise [`scalar::ln`]: zeros map to `MIN_VALUE`.
pub fn ln(p: &[f64]) -> Vec<f64> {
    map_with(p, scalar::ln)
}

/// Elementwise [`scalar::root`]
pub fn root(p: &[f64], n: u32) -> Vec<f64> {
    map_with(p, |a| scalar::root(a, n))
}
