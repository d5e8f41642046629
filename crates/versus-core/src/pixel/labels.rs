//! Distinct-value discovery for label maps

use std::collections::BTreeSet;

use super::{PixelArray, trunc_int};

/// Upper bound (exclusive) of the fixed legacy label histogram
pub const LEGACY_LABEL_LIMIT: i64 = 255;

impl PixelArray {
    /// Sorted distinct truncated values within `[0, 255)`.
    ///
    /// This is the fixed-histogram enumeration kept for compatibility with
    /// results computed over 8-bit label maps: `255`, anything larger and
    /// negative values are silently left out. Prefer
    /// [`unique_labels`](Self::unique_labels).
    pub fn unique(&self) -> Vec<i64> {
        let mut seen = [false; LEGACY_LABEL_LIMIT as usize];
        for &v in self.as_slice() {
            let label = trunc_int(v);
            if (0..LEGACY_LABEL_LIMIT).contains(&label) {
                seen[label as usize] = true;
            }
        }
        seen.iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(label, _)| label as i64)
            .collect()
    }

    /// Sorted distinct non-negative integer labels, with no upper bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use versus_core::PixelArray;
    ///
    /// let map = PixelArray::from_rows(&[vec![300.0, 0.0, 7.0, 7.9]]).unwrap();
    /// assert_eq!(map.unique_labels(), vec![0, 7, 300]);
    /// ```
    pub fn unique_labels(&self) -> Vec<i64> {
        self.as_slice()
            .iter()
            .map(|&v| trunc_int(v))
            .filter(|&label| label >= 0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Ascending sort followed by de-duplication.
///
/// Uses the IEEE total order, so NaN sorts last and is kept once.
pub fn unique_sort(list: &[f64]) -> Vec<f64> {
    let mut out = list.to_vec();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| a.total_cmp(b).is_eq());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_legacy_range() {
        let pa = PixelArray::from_rows(&[vec![3.0, 0.0, 255.0, 254.0, 3.5, 1000.0, -1.0]]).unwrap();
        assert_eq!(pa.unique(), vec![0, 3, 254]);
    }

    #[test]
    fn test_unique_labels_unbounded() {
        let pa = PixelArray::from_rows(&[vec![3.0, 0.0, 255.0, 254.0, 3.5, 1000.0, -1.0]]).unwrap();
        assert_eq!(pa.unique_labels(), vec![0, 3, 254, 255, 1000]);
    }

    #[test]
    fn test_unique_sort() {
        assert_eq!(unique_sort(&[3.0, 1.0, 3.0, 2.0, 1.0]), vec![1.0, 2.0, 3.0]);
        assert!(unique_sort(&[]).is_empty());
    }

    #[test]
    fn test_unique_sort_nan_kept_once() {
        let out = unique_sort(&[f64::NAN, 1.0, f64::NAN]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], 1.0);
        assert!(out[1].is_nan());
    }
}
