//! Shannon entropy family
//!
//! Divergences of the form `Σ P·ln(P / M)` for some reference `M`. Zero
//! bins are absorbed by the `div`/`ln` policy: a term with `P = 0`
//! contributes `0`, and `P > 0` against `Q = 0` stays finite.
//!
//! Only [`jeffreys`], [`topsoe`], [`jensen_shannon`] and
//! [`jensen_difference`] are symmetric in `P` and `Q`.

use versus_core::{Result, scalar, vector};

/// `Σ x·ln(2x / (P + Q))` for `x` one of the two inputs
fn relative_to_midpoint(x: &[f64], total: &[f64]) -> Result<f64> {
    let ratio = vector::div(&vector::mult_scalar(x, 2.0), total)?;
    Ok(vector::sum(&vector::mult(x, &vector::ln(&ratio))?))
}

/// `Σ x·ln(x)`
fn self_information(x: &[f64]) -> Result<Vec<f64>> {
    vector::mult(x, &vector::ln(x))
}

/// Kullback-Leibler divergence: `Σ P·ln(P / Q)`
///
/// # Examples
///
/// ```
/// use versus_measure::shannon::kullback_leibler;
///
/// let p = [0.5, 0.5];
/// assert_eq!(kullback_leibler(&p, &p).unwrap(), 0.0);
/// ```
pub fn kullback_leibler(p: &[f64], q: &[f64]) -> Result<f64> {
    let log_ratio = vector::ln(&vector::div(p, q)?);
    Ok(vector::sum(&vector::mult(p, &log_ratio)?))
}

/// Jeffreys divergence: `Σ(P - Q)·ln(P / Q)`
pub fn jeffreys(p: &[f64], q: &[f64]) -> Result<f64> {
    let log_ratio = vector::ln(&vector::div(p, q)?);
    let diff = vector::sub(p, q)?;
    Ok(vector::sum(&vector::mult(&diff, &log_ratio)?))
}

/// K divergence: `Σ P·ln(2P / (P + Q))`
pub fn k_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    relative_to_midpoint(p, &vector::add(p, q)?)
}

/// Topsøe: `Σ(P·ln(2P / (P + Q)) + Q·ln(2Q / (P + Q)))`
pub fn topsoe(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    let ratio_p = vector::div(&vector::mult_scalar(p, 2.0), &total)?;
    let ratio_q = vector::div(&vector::mult_scalar(q, 2.0), &total)?;
    let terms = vector::add(
        &vector::mult(p, &vector::ln(&ratio_p))?,
        &vector::mult(q, &vector::ln(&ratio_q))?,
    )?;
    Ok(vector::sum(&terms))
}

/// Jensen-Shannon divergence:
/// `0.5·(Σ P·ln(2P / (P + Q)) + Σ Q·ln(2Q / (P + Q)))`
pub fn jensen_shannon(p: &[f64], q: &[f64]) -> Result<f64> {
    let total = vector::add(p, q)?;
    let from_p = relative_to_midpoint(p, &total)?;
    let from_q = relative_to_midpoint(q, &total)?;
    Ok(scalar::mult(0.5, scalar::add(from_p, from_q)))
}

/// Jensen difference:
/// `Σ((P·ln(P) + Q·ln(Q)) / 2 - ((P + Q) / 2)·ln((P + Q) / 2))`
pub fn jensen_difference(p: &[f64], q: &[f64]) -> Result<f64> {
    let mean_info = vector::div_scalar(
        &vector::add(&self_information(p)?, &self_information(q)?)?,
        2.0,
    );
    let midpoint = vector::div_scalar(&vector::add(p, q)?, 2.0);
    let terms = vector::sub(&mean_info, &self_information(&midpoint)?)?;
    Ok(vector::sum(&terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    const P: [f64; 2] = [0.25, 0.75];
    const Q: [f64; 2] = [0.5, 0.5];

    #[test]
    fn test_kullback_leibler() {
        let expected = 0.25 * 0.5f64.ln() + 0.75 * 1.5f64.ln();
        assert!(close(kullback_leibler(&P, &Q).unwrap(), expected));
    }

    #[test]
    fn test_kullback_leibler_is_asymmetric() {
        let pq = kullback_leibler(&P, &Q).unwrap();
        let qp = kullback_leibler(&Q, &P).unwrap();
        assert!((pq - qp).abs() > 1e-6);
    }

    #[test]
    fn test_jeffreys_symmetric() {
        let expected = -0.25 * 0.5f64.ln() + 0.25 * 1.5f64.ln();
        assert!(close(jeffreys(&P, &Q).unwrap(), expected));
        assert!(close(jeffreys(&P, &Q).unwrap(), jeffreys(&Q, &P).unwrap()));
    }

    #[test]
    fn test_midpoint_divergences() {
        let k = 0.25 * (0.5f64 / 0.75).ln() + 0.75 * (1.5f64 / 1.25).ln();
        let k_rev = 0.5 * (1.0f64 / 0.75).ln() + 0.5 * (1.0f64 / 1.25).ln();
        assert!(close(k_divergence(&P, &Q).unwrap(), k));
        assert!(close(topsoe(&P, &Q).unwrap(), k + k_rev));
        assert!(close(jensen_shannon(&P, &Q).unwrap(), 0.5 * (k + k_rev)));
    }

    #[test]
    fn test_jensen_difference() {
        let info = |x: f64| x * x.ln();
        let expected = (info(0.25) + info(0.5)) / 2.0 - info(0.375)
            + (info(0.75) + info(0.5)) / 2.0
            - info(0.625);
        assert!(close(jensen_difference(&P, &Q).unwrap(), expected));
        assert!(jensen_difference(&P, &Q).unwrap() > 0.0);
    }

    #[test]
    fn test_zero_bins_stay_finite() {
        let p = [1.0, 0.0];
        let q = [0.0, 1.0];
        assert!(kullback_leibler(&p, &q).unwrap().is_finite());
        assert!(jeffreys(&p, &q).unwrap().is_finite());
        assert!(close(jensen_shannon(&p, &q).unwrap(), 2f64.ln()));
        assert!(jensen_difference(&p, &q).unwrap().is_finite());
    }

    #[test]
    fn test_identical_inputs() {
        let u = [0.25; 4];
        assert_eq!(kullback_leibler(&u, &u).unwrap(), 0.0);
        assert_eq!(jeffreys(&u, &u).unwrap(), 0.0);
        assert_eq!(k_divergence(&u, &u).unwrap(), 0.0);
        assert_eq!(topsoe(&u, &u).unwrap(), 0.0);
        assert_eq!(jensen_shannon(&u, &u).unwrap(), 0.0);
        assert_eq!(jensen_difference(&u, &u).unwrap(), 0.0);
    }
}
