//! Inner product family
//!
//! Measures built on the bin-wise product `P·Q`.

use versus_core::{Result, scalar, vector};

/// Inner product: `ΣPQ`
pub fn inner_product(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(vector::sum(&vector::mult(p, q)?))
}

/// Harmonic mean: `2Σ(PQ / (P + Q))`
pub fn harmonic_mean(p: &[f64], q: &[f64]) -> Result<f64> {
    let ratio = vector::div(&vector::mult(p, q)?, &vector::add(p, q)?)?;
    Ok(scalar::mult(2.0, vector::sum(&ratio)))
}

/// Cosine similarity: `ΣPQ / (sqrt(ΣP²) · sqrt(ΣQ²))`
///
/// # Examples
///
/// ```
/// use versus_measure::inner_product::cosine;
///
/// assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
/// assert_eq!(cosine(&[0.5, 0.5], &[0.5, 0.5]).unwrap(), 1.0);
/// ```
pub fn cosine(p: &[f64], q: &[f64]) -> Result<f64> {
    let dot = vector::sum(&vector::mult(p, q)?);
    let norm_p = scalar::sqrt(vector::sum(&vector::square(p)));
    let norm_q = scalar::sqrt(vector::sum(&vector::square(q)));
    Ok(scalar::div(dot, scalar::mult(norm_p, norm_q)))
}

/// Kumar-Hassebrook (peak-to-correlation energy):
/// `ΣPQ / (ΣP² + ΣQ² - ΣPQ)`
pub fn kumar_hassebrook(p: &[f64], q: &[f64]) -> Result<f64> {
    let dot = vector::sum(&vector::mult(p, q)?);
    let energy = vector::sum(&vector::square(p)) + vector::sum(&vector::square(q));
    Ok(scalar::div(dot, energy - dot))
}

/// Jaccard similarity: `ΣPQ / (ΣP² + ΣQ² - ΣPQ)`
///
/// Same closed form as [`kumar_hassebrook`], kept as its own computation.
pub fn jaccard(p: &[f64], q: &[f64]) -> Result<f64> {
    let sum_pq = vector::sum(&vector::mult(p, q)?);
    let sum_p2 = vector::sum(&vector::square(p));
    let sum_q2 = vector::sum(&vector::square(q));
    Ok(scalar::div(sum_pq, sum_p2 + sum_q2 - sum_pq))
}

/// Jaccard distance: `Σ(P - Q)² / (ΣP² + ΣQ² - ΣPQ)`
pub fn jaccard_distance(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::sum(&vector::square(&vector::sub(p, q)?));
    let sum_pq = vector::sum(&vector::mult(p, q)?);
    let sum_p2 = vector::sum(&vector::square(p));
    let sum_q2 = vector::sum(&vector::square(q));
    Ok(scalar::div(diff, sum_p2 + sum_q2 - sum_pq))
}

/// Dice similarity: `2ΣPQ / (ΣP² + ΣQ²)`
pub fn dice(p: &[f64], q: &[f64]) -> Result<f64> {
    let dot = scalar::mult(2.0, vector::sum(&vector::mult(p, q)?));
    let energy = vector::sum(&vector::square(p)) + vector::sum(&vector::square(q));
    Ok(scalar::div(dot, energy))
}

/// Dice distance: `Σ(P - Q)² / (ΣP² + ΣQ²)`
pub fn dice_distance(p: &[f64], q: &[f64]) -> Result<f64> {
    let diff = vector::sum(&vector::square(&vector::sub(p, q)?));
    let energy = vector::sum(&vector::square(p)) + vector::sum(&vector::square(q));
    Ok(scalar::div(diff, energy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_orthogonal() {
        let p = [1.0, 0.0, 0.0, 0.0];
        let q = [0.0, 1.0, 0.0, 0.0];
        assert_eq!(inner_product(&p, &q).unwrap(), 0.0);
        assert_eq!(cosine(&p, &q).unwrap(), 0.0);
        assert_eq!(jaccard(&p, &q).unwrap(), 0.0);
        assert_eq!(dice(&p, &q).unwrap(), 0.0);
        assert_eq!(jaccard_distance(&p, &q).unwrap(), 1.0);
        assert_eq!(dice_distance(&p, &q).unwrap(), 1.0);
    }

    #[test]
    fn test_known_values() {
        let p = [1.0, 2.0];
        let q = [2.0, 2.0];
        // ΣPQ = 6, ΣP² = 5, ΣQ² = 8
        assert_eq!(inner_product(&p, &q).unwrap(), 6.0);
        assert!(close(cosine(&p, &q).unwrap(), 6.0 / (5f64.sqrt() * 8f64.sqrt())));
        assert!(close(jaccard(&p, &q).unwrap(), 6.0 / 7.0));
        assert!(close(kumar_hassebrook(&p, &q).unwrap(), 6.0 / 7.0));
        assert!(close(jaccard_distance(&p, &q).unwrap(), 1.0 / 7.0));
        assert!(close(dice(&p, &q).unwrap(), 12.0 / 13.0));
        assert!(close(dice_distance(&p, &q).unwrap(), 1.0 / 13.0));
        // 2 * (2/3 + 4/4)
        assert!(close(harmonic_mean(&p, &q).unwrap(), 2.0 * (2.0 / 3.0 + 1.0)));
    }

    #[test]
    fn test_zero_vectors() {
        let z = [0.0, 0.0];
        assert_eq!(cosine(&z, &z).unwrap(), 0.0);
        assert_eq!(harmonic_mean(&z, &z).unwrap(), 0.0);
        assert_eq!(dice(&z, &z).unwrap(), 0.0);
    }
}
