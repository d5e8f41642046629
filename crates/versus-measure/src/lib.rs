//! versus-measure - Histogram distances and pixel-based measures
//!
//! Each family module holds free functions taking two equal-length
//! histograms (`&[f64]`, usually PDFs) and returning one score:
//!
//! - [`minkowski`] - Euclidean, city block, Lp, Chebyshev
//! - [`l1`] - Sørensen, Gower, Soergel, Kulczynski, Canberra, Lorentzian
//! - [`intersection`] - intersection, Wave Hedges, Czekanowski, Motyka,
//!   Ruzicka, Tanimoto
//! - [`inner_product`] - inner product, harmonic mean, cosine, Jaccard, Dice
//! - [`fidelity`] - Bhattacharyya, Hellinger, Matusita, squared chord
//! - [`chi_squared`] - squared Euclidean and the χ² variants
//! - [`shannon`] - Kullback-Leibler, Jeffreys, Topsøe, Jensen-Shannon
//! - [`combination`] - Taneja, Kumar-Johnson, average of L1 and L∞
//!
//! [`Measure`] selects any of them at runtime. The [`pixel`] module
//! compares whole images position by position.
//!
//! Every measure is total: zero bins never cause a division or logarithm
//! error, because the building blocks in `versus_core::scalar` map `0/0` to
//! `0` and `x/0`, `ln(0)` to `MIN_VALUE`. The only error is a length
//! mismatch between the inputs.
//!
//! # Examples
//!
//! ```
//! use versus_measure::{Measure, minkowski, shannon};
//!
//! let p = [0.25, 0.25, 0.5];
//! let q = [0.5, 0.25, 0.25];
//!
//! let d = minkowski::city_block(&p, &q).unwrap();
//! assert_eq!(d, 0.5);
//!
//! let kl = shannon::kullback_leibler(&p, &q).unwrap();
//! assert!(kl > 0.0);
//!
//! let m: Measure = "jensen_shannon".parse().unwrap();
//! assert!(m.evaluate(&p, &q).unwrap() > 0.0);
//! ```

pub mod catalog;
pub mod chi_squared;
pub mod combination;
pub mod fidelity;
pub mod inner_product;
pub mod intersection;
pub mod l1;
pub mod minkowski;
pub mod pixel;
pub mod shannon;

pub use catalog::{DEFAULT_MINKOWSKI_POWER, Family, Measure};
