//! Contingency table between two labelings
//!
//! Rows are the distinct labels of the comparison labeling and columns the
//! distinct labels of the reference labeling, both ascending. Cell `(i, j)`
//! counts the positions carrying comparison label `i` and reference label
//! `j`.

use versus_core::{scalar, unique_sort, vector};

use crate::error::RegionResult;

/// Pair-count contingency table of two labelings
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    comparison_labels: Vec<f64>,
    reference_labels: Vec<f64>,
    /// Row-major counts, `rows() x cols()`
    counts: Vec<usize>,
}

fn position(labels: &[f64], value: f64) -> Option<usize> {
    labels
        .binary_search_by(|probe| probe.total_cmp(&value))
        .ok()
}

impl ContingencyTable {
    /// Build the table from two label vectors of equal length.
    ///
    /// Entry `k` of both vectors must describe the same position, which
    /// holds for vectors produced by
    /// [`PixelArray::mask`](versus_core::PixelArray::mask) with a common
    /// mask.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::Core` wrapping `LengthMismatch` if the vectors
    /// differ in length.
    pub fn from_labels(reference: &[f64], comparison: &[f64]) -> RegionResult<Self> {
        vector::check_same_len(reference, comparison)?;

        let reference_labels = unique_sort(reference);
        let comparison_labels = unique_sort(comparison);
        let cols = reference_labels.len();
        let mut counts = vec![0usize; comparison_labels.len() * cols];

        for (&r, &c) in reference.iter().zip(comparison) {
            // Both lookups succeed: the label lists were built from these values
            if let (Some(i), Some(j)) = (
                position(&comparison_labels, c),
                position(&reference_labels, r),
            ) {
                counts[i * cols + j] += 1;
            }
        }

        log::debug!(
            "contingency table: {} comparison x {} reference labels over {} positions",
            comparison_labels.len(),
            cols,
            reference.len()
        );

        Ok(Self {
            comparison_labels,
            reference_labels,
            counts,
        })
    }

    /// Number of distinct comparison labels
    pub fn rows(&self) -> usize {
        self.comparison_labels.len()
    }

    /// Number of distinct reference labels
    pub fn cols(&self) -> usize {
        self.reference_labels.len()
    }

    /// Distinct comparison labels, ascending
    pub fn comparison_labels(&self) -> &[f64] {
        &self.comparison_labels
    }

    /// Distinct reference labels, ascending
    pub fn reference_labels(&self) -> &[f64] {
        &self.reference_labels
    }

    /// Count at `(row, col)`, or `None` outside the table
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows() && col < self.cols() {
            Some(self.counts[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Count of positions labeled `comparison` and `reference`; zero for
    /// labels absent from the table.
    pub fn count_of(&self, comparison: f64, reference: f64) -> usize {
        match (
            position(&self.comparison_labels, comparison),
            position(&self.reference_labels, reference),
        ) {
            (Some(i), Some(j)) => self.counts[i * self.cols() + j],
            _ => 0,
        }
    }

    /// Total number of positions counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Per-comparison-label totals
    pub fn row_sums(&self) -> Vec<usize> {
        let cols = self.cols();
        if cols == 0 {
            return vec![0; self.rows()];
        }
        self.counts.chunks(cols).map(|row| row.iter().sum()).collect()
    }

    /// Per-reference-label totals
    pub fn col_sums(&self) -> Vec<usize> {
        let cols = self.cols();
        let mut sums = vec![0usize; cols];
        for (k, &count) in self.counts.iter().enumerate() {
            sums[k % cols] += count;
        }
        sums
    }

    /// `Σ C(M[i][j], 2)`: pairs placed together by both labelings
    pub fn joint_pairs(&self) -> f64 {
        pair_sum(&self.counts)
    }

    /// `Σ C(rowSum_i, 2)`: pairs placed together by the comparison
    pub fn comparison_pairs(&self) -> f64 {
        pair_sum(&self.row_sums())
    }

    /// `Σ C(colSum_j, 2)`: pairs placed together by the reference
    pub fn reference_pairs(&self) -> f64 {
        pair_sum(&self.col_sums())
    }
}

fn pair_sum(counts: &[usize]) -> f64 {
    counts
        .iter()
        .map(|&n| scalar::n_choose_2(n as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_label_table() {
        // reference: 1 1 2 2, comparison: 5 5 5 7
        let table = ContingencyTable::from_labels(&[1.0, 1.0, 2.0, 2.0], &[5.0, 5.0, 5.0, 7.0])
            .unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.comparison_labels(), &[5.0, 7.0]);
        assert_eq!(table.reference_labels(), &[1.0, 2.0]);
        assert_eq!(table.get(0, 0), Some(2));
        assert_eq!(table.get(0, 1), Some(1));
        assert_eq!(table.get(1, 0), Some(0));
        assert_eq!(table.get(1, 1), Some(1));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.count_of(5.0, 2.0), 1);
        assert_eq!(table.count_of(9.0, 2.0), 0);
        assert_eq!(table.total(), 4);
        assert_eq!(table.row_sums(), vec![3, 1]);
        assert_eq!(table.col_sums(), vec![2, 2]);
    }

    #[test]
    fn test_pair_sums() {
        let table = ContingencyTable::from_labels(&[1.0, 1.0, 2.0, 2.0], &[5.0, 5.0, 5.0, 7.0])
            .unwrap();
        // cells 2,1,0,1 -> 1 pair
        assert_eq!(table.joint_pairs(), 1.0);
        // rows 3,1 -> 3 pairs
        assert_eq!(table.comparison_pairs(), 3.0);
        // cols 2,2 -> 2 pairs
        assert_eq!(table.reference_pairs(), 2.0);
    }

    #[test]
    fn test_empty_labels() {
        let table = ContingencyTable::from_labels(&[], &[]).unwrap();
        assert_eq!(table.rows(), 0);
        assert_eq!(table.cols(), 0);
        assert_eq!(table.total(), 0);
        assert!(table.row_sums().is_empty());
        assert!(table.col_sums().is_empty());
        assert_eq!(table.joint_pairs(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(ContingencyTable::from_labels(&[1.0], &[1.0, 2.0]).is_err());
    }
}
