//! versus - Image comparison metrics for Rust
//!
//! # Overview
//!
//! Compares images, or features extracted from them, and reduces each
//! comparison to a score:
//!
//! - Scalar, vector and pixel-array algebra with a total edge-case policy
//! - Histogram distances, divergences and similarities in eight families
//! - Pixel-based measures (mean squared error, pixel correspondence)
//! - Agreement of label maps (adjusted Rand index, total error rates),
//!   globally or label by label
//!
//! # Example
//!
//! ```
//! use versus::measure::Measure;
//! use versus::region::{AgreementOptions, adjusted_rand_index};
//! use versus::PixelArray;
//!
//! let p = [0.1, 0.4, 0.5];
//! let q = [0.2, 0.4, 0.4];
//! let d = Measure::Euclidean.evaluate(&p, &q).unwrap();
//! assert!(d > 0.0);
//!
//! let map = PixelArray::from_rows(&[vec![1.0, 2.0], vec![1.0, 2.0]]).unwrap();
//! let ari = adjusted_rand_index(&map, &map, &AgreementOptions::default()).unwrap();
//! assert_eq!(ari, 1.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use versus_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use versus_measure as measure;
pub use versus_region as region;
