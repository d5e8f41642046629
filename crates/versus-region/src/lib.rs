//! versus-region - Agreement measures for label maps
//!
//! This crate compares two segmentations of the same image, given as
//! [`PixelArray`](versus_core::PixelArray) label maps:
//!
//! - **Rand index** - Pair-counting agreement over a contingency table,
//!   plain and adjusted for chance ([`rand_index`], [`adjusted_rand_index`])
//! - **Total error rates** - Overlap ratios of two binary maps
//!   ([`total_error_rates`], TEE and TET)
//! - **Per-label comparison** - Any of the above applied label by label
//!   ([`compare_per_label`])
//!
//! # Examples
//!
//! ## Adjusted Rand index
//!
//! ```
//! use versus_core::PixelArray;
//! use versus_region::{AgreementOptions, DegeneratePolicy, adjusted_rand_index};
//!
//! let reference = PixelArray::from_rows(&[vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
//! let comparison = PixelArray::from_rows(&[vec![3.0, 3.0], vec![4.0, 4.0]]).unwrap();
//!
//! // Label values are arbitrary, only the partition matters
//! let ari = adjusted_rand_index(&reference, &comparison, &AgreementOptions::default()).unwrap();
//! assert_eq!(ari, 1.0);
//!
//! // A single cluster has no defined index unless a fallback is given
//! let flat = PixelArray::new_with_value(2, 2, 1, 1.0).unwrap();
//! assert!(adjusted_rand_index(&flat, &flat, &AgreementOptions::default()).is_err());
//! let options = AgreementOptions::new().with_degenerate(DegeneratePolicy::Value(1.0));
//! assert_eq!(adjusted_rand_index(&flat, &flat, &options).unwrap(), 1.0);
//! ```
//!
//! ## Per-label total error test
//!
//! ```
//! use versus_core::PixelArray;
//! use versus_region::{AgreementOptions, LabeledMeasure, compare_per_label};
//!
//! let reference = PixelArray::from_rows(&[vec![1.0, 1.0, 2.0, 2.0]]).unwrap();
//! let comparison = PixelArray::from_rows(&[vec![1.0, 2.0, 2.0, 2.0]]).unwrap();
//!
//! let scores = compare_per_label(
//!     &reference,
//!     &comparison,
//!     &AgreementOptions::default(),
//!     LabeledMeasure::TotalErrorTest,
//! )
//! .unwrap();
//! assert_eq!(scores[0].label, 1);
//! assert_eq!(scores[0].score, Some(0.5));
//! assert_eq!(scores[1].score, Some(1.0));
//! ```

pub mod ari;
pub mod contingency;
pub mod error;
pub mod labels;
pub mod total_error;

pub use ari::{AgreementOptions, DegeneratePolicy, RandIndex, adjusted_rand_index, rand_index};
pub use contingency::ContingencyTable;
pub use error::{RegionError, RegionResult};
pub use labels::{
    LEGACY_LABEL_COUNT, LabelMask, LabelRange, LabelScore, LabeledMeasure, compare_per_label,
    label_masks,
};
pub use total_error::{
    OverlapSums, TotalErrorRates, total_error_evaluation, total_error_rates, total_error_test,
};
