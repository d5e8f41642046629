//! Versus Core - numeric algebra and pixel arrays for image comparison
//!
//! This crate provides the building blocks shared by every comparison
//! measure in the Versus workspace:
//!
//! - [`scalar`] - scalar primitives with a total edge-case policy
//!   (`0/0 = 0`, `x/0` and `ln(0)` map to [`scalar::MIN_VALUE`])
//! - [`vector`] - elementwise arithmetic and reductions over `&[f64]`
//!   histograms
//! - [`PixelArray`] - 3-D `rows x cols x bands` array with boolean algebra,
//!   masking and label discovery
//!
//! # Examples
//!
//! ```
//! use versus_core::{PixelArray, vector};
//!
//! let p = [0.5, 0.5, 0.0];
//! let q = [0.0, 0.5, 0.5];
//! assert_eq!(vector::sum(&vector::min(&p, &q).unwrap()), 0.5);
//!
//! let a = PixelArray::from_rows(&[vec![1.0, 0.0], vec![2.0, 2.0]]).unwrap();
//! let b = PixelArray::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
//! assert_eq!(a.or(&b).unwrap().sum(), 3.0);
//! ```

pub mod error;
pub mod pixel;
pub mod scalar;
pub mod vector;

pub use error::{Error, Result};
pub use pixel::{PixelArray, unique_sort};
pub use scalar::{MIN_VALUE, RootOptions};
