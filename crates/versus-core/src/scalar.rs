//! Scalar primitives with a total edge-case policy
//!
//! Every distance and divergence in `versus-measure` is a composition of
//! these functions. Two of them absorb the degeneracies that would otherwise
//! make a metric partial:
//!
//! - [`div`] returns `0` for `0/0` and [`MIN_VALUE`] for `x/0`.
//! - [`ln`] returns [`MIN_VALUE`] for `ln(0)`.
//!
//! As a result no metric ever raises for division by zero or the logarithm
//! of zero, and `0/0 = 0` holds as in the histogram-distance literature.
//!
//! # Examples
//!
//! ```
//! use versus_core::scalar;
//!
//! assert_eq!(scalar::div(0.0, 0.0), 0.0);
//! assert_eq!(scalar::div(1.0, 0.0), scalar::MIN_VALUE);
//! assert!(scalar::ln(0.0) > 0.0);
//! assert_eq!(scalar::n_choose_2(4.0), 6.0);
//! ```

/// Smallest positive representable `f64` (the first subnormal).
///
/// Substituted for the results of `x/0` and `ln(0)`.
pub const MIN_VALUE: f64 = f64::from_bits(1);

/// Default convergence tolerance for [`root`].
pub const ROOT_TOLERANCE: f64 = 0.001;

/// Iteration cap for [`nth_root`]; Newton iteration on inputs without a
/// real root (negative radicand, even degree) never settles.
const ROOT_MAX_ITERATIONS: usize = 10_000;

/// Options for n-th root computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Stop once successive iterates differ by at most this much
    pub tolerance: f64,
    /// Hard cap on the number of Newton steps
    pub max_iterations: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            tolerance: ROOT_TOLERANCE,
            max_iterations: ROOT_MAX_ITERATIONS,
        }
    }
}

impl RootOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

#[inline]
pub fn add(p: f64, q: f64) -> f64 {
    p + q
}

#[inline]
pub fn sub(p: f64, q: f64) -> f64 {
    p - q
}

#[inline]
pub fn mult(p: f64, q: f64) -> f64 {
    p * q
}

/// Total division.
///
/// - `0 / 0` is `0`
/// - `p / q` when `q != 0`
/// - otherwise [`MIN_VALUE`]
#[inline]
pub fn div(p: f64, q: f64) -> f64 {
    if p == 0.0 && q == 0.0 {
        return 0.0;
    }
    if q != 0.0 { p / q } else { MIN_VALUE }
}

#[inline]
pub fn min(p: f64, q: f64) -> f64 {
    p.min(q)
}

#[inline]
pub fn max(p: f64, q: f64) -> f64 {
    p.max(q)
}

/// `|p - q|`
#[inline]
pub fn abs_sub(p: f64, q: f64) -> f64 {
    (p - q).abs()
}

/// `|p + q|`
#[inline]
pub fn abs_add(p: f64, q: f64) -> f64 {
    (p + q).abs()
}

/// `|p - q| * |p - q|`
#[inline]
pub fn abs_sub_squared(p: f64, q: f64) -> f64 {
    abs_sub(p, q) * abs_sub(p, q)
}

/// `|p - q|^n`
#[inline]
pub fn abs_sub_power(p: f64, q: f64, n: i32) -> f64 {
    abs_sub(p, q).powi(n)
}

/// `|p - q| / r` under the [`div`] policy
#[inline]
pub fn abs_sub_div(p: f64, q: f64, r: f64) -> f64 {
    div(abs_sub(p, q), r)
}

#[inline]
pub fn square(p: f64) -> f64 {
    p * p
}

#[inline]
pub fn sqrt(p: f64) -> f64 {
    p.sqrt()
}

/// Natural logarithm, with `ln(0)` mapped to [`MIN_VALUE`].
///
/// Never returns `-inf` for a zero operand.
#[inline]
pub fn ln(p: f64) -> f64 {
    if p == 0.0 {
        return MIN_VALUE;
    }
    p.ln()
}

/// `-ln(p)`
#[inline]
pub fn neg_ln(p: f64) -> f64 {
    -ln(p)
}

/// `v * (1 / d)`, with the reciprocal taken under the [`div`] policy
#[inline]
pub fn mult_by_reciprocal(v: f64, d: f64) -> f64 {
    mult(div(1.0, d), v)
}

/// Number of unordered pairs among `n` items: `(n^2 - n) / 2`
#[inline]
pub fn n_choose_2(n: f64) -> f64 {
    (n * n - n) / 2.0
}

/// Binarize: `1` if `x > 0`, else `0`
#[inline]
pub fn d2b(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// n-th root with the default tolerance of `0.001`.
///
/// See [`nth_root`].
pub fn root(a: f64, n: u32) -> f64 {
    nth_root(a, n, &RootOptions::default())
}

/// n-th root by Newton iteration.
///
/// Starts from `x = a / n` (with `a` itself as the previous iterate) and
/// repeats `x = ((n - 1) * x + a / x^(n - 1)) / n` until successive iterates
/// differ by no more than `options.tolerance`. `a` of `0` or `1` is returned
/// unchanged, as is any `a` when `n <= 1`.
///
/// # Examples
///
/// ```
/// use versus_core::scalar::{RootOptions, nth_root};
///
/// let r = nth_root(27.0, 3, &RootOptions::default());
/// assert!((r - 3.0).abs() < 1e-3);
/// ```
pub fn nth_root(a: f64, n: u32, options: &RootOptions) -> f64 {
    if a == 0.0 || a == 1.0 || n <= 1 {
        return a;
    }

    let nf = n as f64;
    let mut x_prev = a;
    let mut x = div(a, nf);
    let mut iterations = 0;

    while (x - x_prev).abs() > options.tolerance {
        if iterations == options.max_iterations {
            log::warn!("nth_root({a}, {n}) did not converge in {iterations} iterations");
            break;
        }
        x_prev = x;
        let power = x.powi(n as i32 - 1);
        x = div(add(mult(nf - 1.0, x), div(a, power)), nf);
        iterations += 1;
    }

    x
}
