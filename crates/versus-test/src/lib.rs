//! versus-test - Regression test framework for Versus
//!
//! Regression tests record every comparison in a [`RegParams`] and assert
//! on [`RegParams::cleanup`] at the end, so a single run reports all
//! mismatches instead of stopping at the first one.
//!
//! # Usage
//!
//! ```ignore
//! use versus_test::RegParams;
//!
//! let mut rp = RegParams::new("ari");
//! rp.compare_values(1.0, ari, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_VERBOSE`: when set (and not `0`/`false`), print every
//!   comparison, not only failures

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, VERBOSE_ENV, verbose_from_env};
