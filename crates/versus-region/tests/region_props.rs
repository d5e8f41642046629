//! Invariants of the label-map agreement measures

use proptest::prelude::*;
use versus_core::PixelArray;
use versus_region::{rand_index, total_error_rates};

fn arb_map_pair(max_label: u8) -> impl Strategy<Value = (PixelArray, PixelArray)> {
    (1usize..6, 1usize..6).prop_flat_map(move |(rows, cols)| {
        let cell = (0..=max_label).prop_map(f64::from);
        (
            prop::collection::vec(cell.clone(), rows * cols),
            prop::collection::vec(cell, rows * cols),
        )
            .prop_map(move |(a, b)| {
                (
                    PixelArray::from_data(rows, cols, 1, a).unwrap(),
                    PixelArray::from_data(rows, cols, 1, b).unwrap(),
                )
            })
    })
}

fn shift_labels(map: &PixelArray, offset: f64) -> PixelArray {
    let data = map
        .as_slice()
        .iter()
        .map(|&v| if v == 0.0 { 0.0 } else { v + offset })
        .collect();
    PixelArray::from_data(map.rows(), map.cols(), map.bands(), data).unwrap()
}

proptest! {
    #[test]
    fn prop_ari_symmetric((a, b) in arb_map_pair(4)) {
        let ab = rand_index(&a, &b).unwrap();
        let ba = rand_index(&b, &a).unwrap();
        prop_assert_eq!(ab.adjusted(), ba.adjusted());
        prop_assert_eq!(ab.rand_index(), ba.rand_index());
    }

    #[test]
    fn prop_ari_self_agreement((a, _b) in arb_map_pair(4)) {
        let ri = rand_index(&a, &a).unwrap();
        if let Some(ari) = ri.adjusted() {
            prop_assert_eq!(ari, 1.0);
        }
        if ri.valid_count > 1 {
            prop_assert_eq!(ri.rand_index(), 1.0);
        }
    }

    #[test]
    fn prop_ari_ignores_label_values((a, b) in arb_map_pair(4)) {
        let shifted = shift_labels(&b, 10.0);
        let before = rand_index(&a, &b).unwrap();
        let after = rand_index(&a, &shifted).unwrap();
        prop_assert_eq!(before.adjusted(), after.adjusted());
    }

    #[test]
    fn prop_rand_index_in_unit_interval((a, b) in arb_map_pair(4)) {
        let ri = rand_index(&a, &b).unwrap().rand_index();
        prop_assert!((0.0..=1.0).contains(&ri), "rand index {}", ri);
    }

    #[test]
    fn prop_binary_rates_partition_union((a, b) in arb_map_pair(1)) {
        let rates = total_error_rates(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&rates.tet));
        prop_assert!(rates.tee == 0.0 || rates.tee == 1.0);
        let union_covered = a.or(&b).unwrap().sum() > 0.0;
        if union_covered {
            let total = rates.similarity + rates.false_positive + rates.false_negative;
            prop_assert!((total - 1.0).abs() < 1e-12, "sum of rates {}", total);
        }
    }
}
