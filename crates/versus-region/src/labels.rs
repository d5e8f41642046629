//! Per-label comparison of two label maps
//!
//! A label map is split into one binary mask per label value, and a
//! [`LabeledMeasure`] is applied to the masks of the same label in both
//! maps. The result carries one [`LabelScore`] per enumerated label.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use versus_core::PixelArray;

use crate::ari::{AgreementOptions, adjusted_rand_index};
use crate::error::{RegionError, RegionResult};
use crate::total_error::{total_error_evaluation, total_error_test};

/// Number of labels enumerated by [`LabelRange::Legacy`]
pub const LEGACY_LABEL_COUNT: usize = 256;

/// Which label values a per-label comparison enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelRange {
    /// Labels present in either map, ascending
    #[default]
    Discovered,
    /// Every value in `0..=255`, present or not
    Legacy,
}

/// Binary mask of one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMask {
    pub label: i64,
    pub mask: PixelArray,
}

/// Score of one label, `None` when the label is absent from both maps or
/// the measure is undefined for its masks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScore {
    pub label: i64,
    pub score: Option<f64>,
}

/// Agreement measure evaluated on each pair of label masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabeledMeasure {
    AdjustedRandIndex,
    TotalErrorEvaluation,
    TotalErrorTest,
}

impl LabeledMeasure {
    /// Every labeled measure
    pub const ALL: [LabeledMeasure; 3] = [
        LabeledMeasure::AdjustedRandIndex,
        LabeledMeasure::TotalErrorEvaluation,
        LabeledMeasure::TotalErrorTest,
    ];

    /// Stable identifier
    pub fn name(self) -> &'static str {
        match self {
            LabeledMeasure::AdjustedRandIndex => "adjusted_rand_index",
            LabeledMeasure::TotalErrorEvaluation => "total_error_evaluation",
            LabeledMeasure::TotalErrorTest => "total_error_test",
        }
    }

    /// Evaluate the measure on one pair of maps
    pub fn evaluate(
        self,
        reference: &PixelArray,
        comparison: &PixelArray,
        options: &AgreementOptions,
    ) -> RegionResult<f64> {
        match self {
            LabeledMeasure::AdjustedRandIndex => {
                adjusted_rand_index(reference, comparison, options)
            }
            LabeledMeasure::TotalErrorEvaluation => total_error_evaluation(reference, comparison),
            LabeledMeasure::TotalErrorTest => total_error_test(reference, comparison),
        }
    }
}

impl fmt::Display for LabeledMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabeledMeasure {
    type Err = RegionError;

    fn from_str(s: &str) -> RegionResult<Self> {
        LabeledMeasure::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RegionError::InvalidParameters(format!("unknown labeled measure: {s}")))
    }
}

fn enumerate_labels(maps: &[&PixelArray], range: LabelRange) -> Vec<i64> {
    match range {
        LabelRange::Discovered => maps
            .iter()
            .flat_map(|m| m.unique_labels())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        LabelRange::Legacy => {
            for map in maps {
                let dropped = map
                    .unique_labels()
                    .into_iter()
                    .filter(|&l| l >= LEGACY_LABEL_COUNT as i64)
                    .count();
                if dropped > 0 {
                    log::warn!("legacy label range drops {dropped} label value(s) above 255");
                }
            }
            (0..LEGACY_LABEL_COUNT as i64).collect()
        }
    }
}

/// Split a label map into one binary mask per label.
///
/// With [`LabelRange::Discovered`] the labels are those of `map`; with
/// [`LabelRange::Legacy`] all 256 values are enumerated and labels above
/// 255 are dropped.
///
/// # Examples
///
/// ```
/// use versus_core::PixelArray;
/// use versus_region::{LabelRange, label_masks};
///
/// let map = PixelArray::from_rows(&[vec![0.0, 4.0, 4.0]]).unwrap();
/// let masks = label_masks(&map, LabelRange::Discovered);
/// assert_eq!(masks.len(), 2);
/// assert_eq!(masks[1].label, 4);
/// assert_eq!(masks[1].mask.as_slice(), &[0.0, 1.0, 1.0]);
/// ```
pub fn label_masks(map: &PixelArray, range: LabelRange) -> Vec<LabelMask> {
    enumerate_labels(&[map], range)
        .into_iter()
        .map(|label| LabelMask {
            label,
            mask: map.match_value(label as f64),
        })
        .collect()
}

/// Evaluate `measure` on the masks of every label, in ascending label
/// order.
///
/// The label set comes from `options.labels`. A label absent from both
/// maps scores `None`, as does a label whose measure is undefined (a
/// degenerate Rand index under [`DegeneratePolicy::Error`]).
///
/// # Errors
///
/// Returns `RegionError::Core` if the maps differ in shape.
///
/// [`DegeneratePolicy::Error`]: crate::DegeneratePolicy::Error
pub fn compare_per_label(
    reference: &PixelArray,
    comparison: &PixelArray,
    options: &AgreementOptions,
    measure: LabeledMeasure,
) -> RegionResult<Vec<LabelScore>> {
    reference.check_same_dimensions(comparison)?;

    let present: BTreeSet<i64> = enumerate_labels(&[reference, comparison], LabelRange::Discovered)
        .into_iter()
        .collect();

    let mut scores = Vec::new();
    for label in enumerate_labels(&[reference, comparison], options.labels) {
        if !present.contains(&label) {
            scores.push(LabelScore { label, score: None });
            continue;
        }

        let ref_mask = reference.match_value(label as f64);
        let cmp_mask = comparison.match_value(label as f64);
        let score = match measure.evaluate(&ref_mask, &cmp_mask, options) {
            Ok(v) => Some(v),
            Err(RegionError::UndefinedAggregate { .. }) => None,
            Err(e) => return Err(e),
        };
        scores.push(LabelScore { label, score });
    }
    Ok(scores)
}
