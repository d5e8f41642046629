//! Rand index and adjusted Rand index of two label maps
//!
//! Only positions labeled in at least one map take part: a position where
//! both maps carry `0` is background in both and is ignored. The labels at
//! the remaining positions are gathered with a common mask, cross-tabulated
//! in a [`ContingencyTable`], and reduced to pair counts.

use versus_core::{PixelArray, scalar};

use crate::contingency::ContingencyTable;
use crate::error::{RegionError, RegionResult};
use crate::labels::LabelRange;

/// What to return when an aggregate has a zero denominator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DegeneratePolicy {
    /// Fail with [`RegionError::UndefinedAggregate`]
    #[default]
    Error,
    /// Return the given value instead
    Value(f64),
}

impl DegeneratePolicy {
    /// Apply the policy to a degenerate aggregate
    pub fn resolve(self, measure: &'static str, reason: &str) -> RegionResult<f64> {
        match self {
            DegeneratePolicy::Error => Err(RegionError::UndefinedAggregate {
                measure,
                reason: reason.to_string(),
            }),
            DegeneratePolicy::Value(v) => {
                log::warn!("{measure} is undefined ({reason}), using {v}");
                Ok(v)
            }
        }
    }
}

/// Options for label-map agreement measures
#[derive(Debug, Clone, Default)]
pub struct AgreementOptions {
    /// Policy for aggregates with a zero denominator
    pub degenerate: DegeneratePolicy,
    /// Label enumeration used by per-label comparisons
    pub labels: LabelRange,
}

impl AgreementOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the degenerate-aggregate policy
    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    /// Set the label enumeration
    pub fn with_labels(mut self, labels: LabelRange) -> Self {
        self.labels = labels;
        self
    }
}

/// Pair counts of two label maps and the indices derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct RandIndex {
    /// Number of positions labeled in at least one map
    pub valid_count: usize,
    /// Pairs placed together by both maps, `Σ C(M[i][j], 2)`
    pub joint_pairs: f64,
    /// Pairs placed together by the comparison map
    pub comparison_pairs: f64,
    /// Pairs placed together by the reference map
    pub reference_pairs: f64,
    /// Distinct comparison labels (table rows)
    pub comparison_labels: usize,
    /// Distinct reference labels (table columns)
    pub reference_labels: usize,
}

impl RandIndex {
    /// `C(N, 2)`, the number of position pairs
    pub fn total_pairs(&self) -> f64 {
        scalar::n_choose_2(self.valid_count as f64)
    }

    /// Joint pairs expected by chance, `b·c / C(N, 2)`
    pub fn expected(&self) -> f64 {
        scalar::div(
            self.comparison_pairs * self.reference_pairs,
            self.total_pairs(),
        )
    }

    /// Largest achievable joint pair count, `(b + c) / 2`
    pub fn max_index(&self) -> f64 {
        0.5 * (self.comparison_pairs + self.reference_pairs)
    }

    /// Plain Rand index: fraction of position pairs on which the maps agree
    ///
    /// `(a + (C(N,2) + a - b - c)) / C(N,2)`, where the second term counts
    /// the pairs split by both maps. Zero when there are no pairs.
    pub fn rand_index(&self) -> f64 {
        let a = self.joint_pairs;
        let total = self.total_pairs();
        let apart = total + a - self.comparison_pairs - self.reference_pairs;
        scalar::div(a + apart, total)
    }

    /// Adjusted Rand index, `None` when `max_index() == expected()`
    pub fn adjusted(&self) -> Option<f64> {
        let expected = self.expected();
        let max = self.max_index();
        if max == expected {
            None
        } else {
            Some((self.joint_pairs - expected) / (max - expected))
        }
    }
}

/// Compute the pair counts of two label maps.
///
/// # Arguments
///
/// * `reference` - Ground-truth label map
/// * `comparison` - Label map under evaluation
///
/// # Errors
///
/// Returns `RegionError::Core` if the maps differ in rows, columns or
/// bands.
pub fn rand_index(reference: &PixelArray, comparison: &PixelArray) -> RegionResult<RandIndex> {
    let valid = reference.add(comparison)?.logical();
    let valid_count = valid.count_nonzero();

    let reference_labels = reference.mask(&valid)?;
    let comparison_labels = comparison.mask(&valid)?;
    let table = ContingencyTable::from_labels(&reference_labels, &comparison_labels)?;

    Ok(RandIndex {
        valid_count,
        joint_pairs: table.joint_pairs(),
        comparison_pairs: table.comparison_pairs(),
        reference_pairs: table.reference_pairs(),
        comparison_labels: table.rows(),
        reference_labels: table.cols(),
    })
}

/// Adjusted Rand index of two label maps.
///
/// One for identical partitions of the labeled positions, around zero for
/// chance agreement. When every labeled position falls in one cluster of
/// both maps, or no position is labeled at all, the index is undefined and
/// `options.degenerate` decides the outcome.
///
/// # Errors
///
/// Returns `RegionError::Core` on a shape mismatch and
/// `RegionError::UndefinedAggregate` for a degenerate input under
/// [`DegeneratePolicy::Error`].
///
/// # Examples
///
/// ```
/// use versus_core::PixelArray;
/// use versus_region::{AgreementOptions, adjusted_rand_index};
///
/// let map = PixelArray::from_rows(&[vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
/// let ari = adjusted_rand_index(&map, &map, &AgreementOptions::default()).unwrap();
/// assert_eq!(ari, 1.0);
/// ```
pub fn adjusted_rand_index(
    reference: &PixelArray,
    comparison: &PixelArray,
    options: &AgreementOptions,
) -> RegionResult<f64> {
    let counts = rand_index(reference, comparison)?;
    match counts.adjusted() {
        Some(ari) => Ok(ari),
        None => options.degenerate.resolve(
            "adjusted rand index",
            &format!(
                "expected index equals maximum index over {} positions",
                counts.valid_count
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(rows: &[Vec<f64>]) -> PixelArray {
        PixelArray::from_rows(rows).unwrap()
    }

    #[test]
    fn test_identical_two_region_map() {
        let m = map(&[vec![1.0, 1.0], vec![2.0, 2.0]]);
        let ri = rand_index(&m, &m).unwrap();
        assert_eq!(ri.valid_count, 4);
        assert_eq!(ri.joint_pairs, 2.0);
        assert_eq!(ri.comparison_pairs, 2.0);
        assert_eq!(ri.reference_pairs, 2.0);
        assert_eq!(ri.comparison_labels, 2);
        assert_eq!(ri.reference_labels, 2);
        assert_eq!(ri.total_pairs(), 6.0);
        assert_eq!(ri.adjusted(), Some(1.0));
        assert_eq!(ri.rand_index(), 1.0);
    }

    #[test]
    fn test_background_is_ignored() {
        // Zero in both maps at the last column
        let reference = map(&[vec![1.0, 2.0, 0.0]]);
        let comparison = map(&[vec![3.0, 4.0, 0.0]]);
        let ri = rand_index(&reference, &comparison).unwrap();
        assert_eq!(ri.valid_count, 2);
        assert_eq!(ri.comparison_labels, 2);
        assert_eq!(ri.reference_labels, 2);
    }

    #[test]
    fn test_split_cluster() {
        // reference 1 1 1 1, comparison 1 1 2 2
        let reference = map(&[vec![1.0, 1.0, 1.0, 1.0]]);
        let comparison = map(&[vec![1.0, 1.0, 2.0, 2.0]]);
        let ri = rand_index(&reference, &comparison).unwrap();
        // a = 2, b = 2, c = 6, C(4,2) = 6
        assert_eq!(ri.joint_pairs, 2.0);
        assert_eq!(ri.comparison_pairs, 2.0);
        assert_eq!(ri.reference_pairs, 6.0);
        assert_eq!(ri.expected(), 2.0);
        assert_eq!(ri.max_index(), 4.0);
        assert_eq!(ri.adjusted(), Some(0.0));
        // (2 + (6 + 2 - 2 - 6)) / 6
        assert!((ri.rand_index() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_policy() {
        let single = map(&[vec![5.0, 5.0], vec![5.0, 5.0]]);
        let err = adjusted_rand_index(&single, &single, &AgreementOptions::default());
        assert!(matches!(err, Err(RegionError::UndefinedAggregate { .. })));

        let options = AgreementOptions::new().with_degenerate(DegeneratePolicy::Value(1.0));
        assert_eq!(adjusted_rand_index(&single, &single, &options).unwrap(), 1.0);
    }

    #[test]
    fn test_all_background_is_degenerate() {
        let zeros = map(&[vec![0.0, 0.0]]);
        let ri = rand_index(&zeros, &zeros).unwrap();
        assert_eq!(ri.valid_count, 0);
        assert_eq!(ri.adjusted(), None);
        assert_eq!(ri.rand_index(), 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = map(&[vec![1.0, 2.0]]);
        let b = map(&[vec![1.0], vec![2.0]]);
        assert!(matches!(
            rand_index(&a, &b),
            Err(RegionError::Core(versus_core::Error::DimensionMismatch { .. }))
        ));
    }
}
