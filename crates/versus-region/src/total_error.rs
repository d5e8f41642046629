//! Total error rates of two binary (or label) maps
//!
//! The first map is the reference and the second the map under test. Both
//! are compared through their logical overlap; all ratios follow the
//! [`scalar::div`] policy, so empty maps give `0` or `MIN_VALUE` rather
//! than an error.

use versus_core::{PixelArray, scalar};

use crate::error::RegionResult;

/// Sums of the two maps and of their boolean combinations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapSums {
    /// `Σ first`
    pub first: f64,
    /// `Σ second`
    pub second: f64,
    /// `Σ (first ∧ second)`
    pub both: f64,
    /// `Σ (first ∨ second)`
    pub either: f64,
    /// `Σ (¬first ∧ second)`
    pub second_only: f64,
    /// `Σ (first ∧ ¬second)`
    pub first_only: f64,
}

impl OverlapSums {
    /// Compute the overlap sums.
    ///
    /// `first` and `second` are summed as given; the boolean combinations
    /// go through [`PixelArray::logical`].
    ///
    /// # Errors
    ///
    /// Returns `RegionError::Core` with `DimensionMismatch` if rows or
    /// columns differ, or `BandMismatch` if only the band counts do.
    pub fn new(first: &PixelArray, second: &PixelArray) -> RegionResult<Self> {
        first.check_same_size(second)?;

        let not_first = first.not();
        let not_second = second.not();

        Ok(Self {
            first: first.sum(),
            second: second.sum(),
            both: first.and(second)?.sum(),
            either: first.or(second)?.sum(),
            second_only: not_first.and(second)?.sum(),
            first_only: first.and(&not_second)?.sum(),
        })
    }
}

/// The total error rates derived from one [`OverlapSums`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalErrorRates {
    /// Total error evaluation, binarized: `d2b(tee_ratio)`
    pub tee: f64,
    /// Total error evaluation before binarization: `both / second`, or `1`
    /// when the second map is empty
    pub tee_ratio: f64,
    /// Total error test: `both / first`
    pub tet: f64,
    /// Similarity index: `both / either`
    pub similarity: f64,
    /// False-positive rate: `second_only / either`
    pub false_positive: f64,
    /// False-negative rate: `first_only / either`
    pub false_negative: f64,
}

impl From<OverlapSums> for TotalErrorRates {
    fn from(s: OverlapSums) -> Self {
        let tee_ratio = if s.second == 0.0 {
            1.0
        } else {
            scalar::div(s.both, s.second)
        };
        Self {
            tee: scalar::d2b(tee_ratio),
            tee_ratio,
            tet: scalar::div(s.both, s.first),
            similarity: scalar::div(s.both, s.either),
            false_positive: scalar::div(s.second_only, s.either),
            false_negative: scalar::div(s.first_only, s.either),
        }
    }
}

/// Compute every total error rate of two maps.
///
/// # Errors
///
/// See [`OverlapSums::new`].
///
/// # Examples
///
/// ```
/// use versus_core::PixelArray;
/// use versus_region::total_error_rates;
///
/// let a = PixelArray::from_rows(&[vec![1.0, 1.0, 0.0, 0.0]]).unwrap();
/// let b = PixelArray::from_rows(&[vec![1.0, 0.0, 1.0, 0.0]]).unwrap();
/// let rates = total_error_rates(&a, &b).unwrap();
/// assert_eq!(rates.tet, 0.5);
/// assert_eq!(rates.tee_ratio, 0.5);
/// assert_eq!(rates.tee, 1.0);
/// ```
pub fn total_error_rates(first: &PixelArray, second: &PixelArray) -> RegionResult<TotalErrorRates> {
    Ok(OverlapSums::new(first, second)?.into())
}

/// Total error evaluation (TEE), binarized to `0` or `1`.
///
/// Use [`TotalErrorRates::tee_ratio`] for the continuous value.
pub fn total_error_evaluation(first: &PixelArray, second: &PixelArray) -> RegionResult<f64> {
    Ok(total_error_rates(first, second)?.tee)
}

/// Total error test (TET): overlap relative to the first map
pub fn total_error_test(first: &PixelArray, second: &PixelArray) -> RegionResult<f64> {
    Ok(total_error_rates(first, second)?.tet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;

    fn map(rows: &[Vec<f64>]) -> PixelArray {
        PixelArray::from_rows(rows).unwrap()
    }

    #[test]
    fn test_ones_against_zeros() {
        let ones = PixelArray::new_with_value(2, 2, 1, 1.0).unwrap();
        let zeros = PixelArray::new(2, 2, 1).unwrap();

        let sums = OverlapSums::new(&ones, &zeros).unwrap();
        assert_eq!(sums.first, 4.0);
        assert_eq!(sums.second, 0.0);
        assert_eq!(sums.both, 0.0);
        assert_eq!(sums.either, 4.0);
        assert_eq!(sums.first_only, 4.0);
        assert_eq!(sums.second_only, 0.0);

        let rates = TotalErrorRates::from(sums);
        assert_eq!(rates.tet, 0.0);
        assert_eq!(rates.tee_ratio, 1.0);
        assert_eq!(rates.tee, 1.0);
        assert_eq!(rates.similarity, 0.0);
        assert_eq!(rates.false_negative, 1.0);
        assert_eq!(rates.false_positive, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = map(&[vec![1.0, 1.0], vec![1.0, 0.0]]);
        let b = map(&[vec![1.0, 0.0], vec![1.0, 1.0]]);
        let rates = total_error_rates(&a, &b).unwrap();
        assert!((rates.tet - 2.0 / 3.0).abs() < 1e-15);
        assert!((rates.tee_ratio - 2.0 / 3.0).abs() < 1e-15);
        assert_eq!(rates.tee, 1.0);
        assert_eq!(rates.similarity, 0.5);
        assert_eq!(rates.false_positive, 0.25);
        assert_eq!(rates.false_negative, 0.25);
    }

    #[test]
    fn test_disjoint_maps_binarize_to_zero() {
        let a = map(&[vec![1.0, 0.0]]);
        let b = map(&[vec![0.0, 1.0]]);
        assert_eq!(total_error_evaluation(&a, &b).unwrap(), 0.0);
        assert_eq!(total_error_test(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_maps() {
        let zeros = PixelArray::new(2, 2, 1).unwrap();
        let rates = total_error_rates(&zeros, &zeros).unwrap();
        // 0/0 resolves to 0
        assert_eq!(rates.tet, 0.0);
        assert_eq!(rates.similarity, 0.0);
        assert_eq!(rates.tee, 1.0);
    }

    #[test]
    fn test_size_mismatch() {
        let a = PixelArray::new(2, 2, 1).unwrap();
        let b = PixelArray::new(2, 3, 1).unwrap();
        assert!(matches!(
            total_error_rates(&a, &b),
            Err(RegionError::Core(versus_core::Error::DimensionMismatch { .. }))
        ));

        let c = PixelArray::new(2, 2, 3).unwrap();
        assert!(matches!(
            total_error_rates(&a, &c),
            Err(RegionError::Core(versus_core::Error::BandMismatch { .. }))
        ));
    }
}
