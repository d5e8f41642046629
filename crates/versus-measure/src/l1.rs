//! L1 family
//!
//! Variations on the absolute difference `|P - Q|`, each normalized
//! differently.

use versus_core::{Result, scalar, vector};

/// Sørensen (Bray-Curtis): `Σ|P - Q| / Σ(P + Q)`
pub fn sorensen(p: &[f64], q: &[f64]) -> Result<f64> {
    let num = vector::sum(&vector::abs_sub(p, q)?);
    let den = vector::sum(&vector::add(p, q)?);
    Ok(scalar::div(num, den))
}

/// Gower: `(Σ|P - Q| / R) / len(P)`
///
/// `r` holds the range of each bin; for PDFs it is all ones.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` unless all three vectors have the same
/// length.
pub fn gower(p: &[f64], q: &[f64], r: &[f64]) -> Result<f64> {
    let scaled = vector::sum(&vector::abs_sub_div(p, q, r)?);
    Ok(scalar::mult_by_reciprocal(scaled, p.len() as f64))
}

/// Soergel: `Σ|P - Q| / Σmax(P, Q)`
pub fn soergel(p: &[f64], q: &[f64]) -> Result<f64> {
    let num = vector::sum(&vector::abs_sub(p, q)?);
    let den = vector::sum(&vector::max(p, q)?);
    Ok(scalar::div(num, den))
}

/// Kulczynski distance: `Σ|P - Q| / Σmin(P, Q)`
pub fn kulczynski_d(p: &[f64], q: &[f64]) -> Result<f64> {
    let num = vector::sum(&vector::abs_sub(p, q)?);
    let den = vector::sum(&vector::min(p, q)?);
    Ok(scalar::div(num, den))
}

/// Canberra: `Σ(|P - Q| / (P + Q))`
pub fn canberra(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    Ok(vector::sum(&vector::abs_sub_div(p, q, &total)?))
}

/// Lorentzian: `Σ ln(|P - Q| + 1)`
pub fn lorentzian(p: &[f64], q: &[f64]) -> Result<f64> {
    let shifted = vector::add_scalar(&vector::abs_sub(p, q)?, 1.0);
    Ok(vector::sum(&vector::ln(&shifted)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use versus_core::MIN_VALUE;

    const P: [f64; 4] = [0.4, 0.1, 0.5, 0.0];
    const Q: [f64; 4] = [0.2, 0.3, 0.5, 0.0];

    #[test]
    fn test_sorensen() {
        // Σ|P-Q| = 0.4, Σ(P+Q) = 2
        assert!((sorensen(&P, &Q).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(sorensen(&[0.0, 0.0], &[0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_gower() {
        let r = [1.0; 4];
        assert!((gower(&P, &Q, &r).unwrap() - 0.1).abs() < 1e-12);
        let half = [0.5; 4];
        assert!((gower(&P, &Q, &half).unwrap() - 0.2).abs() < 1e-12);
        assert!(gower(&P, &Q, &[1.0]).is_err());
    }

    #[test]
    fn test_soergel_and_kulczynski() {
        // Σmax = 1.2, Σmin = 0.8
        assert!((soergel(&P, &Q).unwrap() - 0.4 / 1.2).abs() < 1e-12);
        assert!((kulczynski_d(&P, &Q).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_kulczynski_disjoint_support() {
        // Σmin = 0, so the ratio falls back to MIN_VALUE
        let d = kulczynski_d(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert_eq!(d, MIN_VALUE);
    }

    #[test]
    fn test_canberra_zero_bins() {
        // |0.2|/0.6 + |0.2|/0.4 + 0 + 0/0 (= 0)
        let expected = 0.2 / 0.6 + 0.2 / 0.4;
        assert!((canberra(&P, &Q).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lorentzian() {
        let expected = 2.0 * 1.2f64.ln();
        assert!((lorentzian(&P, &Q).unwrap() - expected).abs() < 1e-12);
        assert_eq!(lorentzian(&P, &P).unwrap(), 0.0);
    }
}
