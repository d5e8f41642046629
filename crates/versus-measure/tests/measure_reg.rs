//! Histogram measure regression test
//!
//! Checks known scenarios, reference values on the 8-bin fixture PDFs, and
//! the identical-input fixed point of every measure in the catalog.

use versus_core::MIN_VALUE;
use versus_measure::{
    Family, Measure, chi_squared, fidelity, inner_product, intersection, l1, minkowski, shannon,
};
use versus_test::{RegParams, fixtures};

// ========================================================================
// Test: Orthogonal unit vectors
// ========================================================================

#[test]
fn measure_reg_orthogonal() {
    let mut rp = RegParams::new("measure_orthogonal");

    let (p, q) = fixtures::orthogonal_pair();

    rp.compare_values(2.0, minkowski::city_block(&p, &q).unwrap(), 0.0);
    rp.compare_values(2f64.sqrt(), minkowski::euclidean(&p, &q).unwrap(), 0.0);
    rp.compare_values(0.0, inner_product::cosine(&p, &q).unwrap(), 0.0);
    rp.compare_values(0.0, intersection::intersection(&p, &q).unwrap(), 0.0);
    rp.compare_values(1.0, minkowski::chebyshev(&p, &q).unwrap(), 0.0);
    rp.compare_values(1.0, l1::sorensen(&p, &q).unwrap(), 0.0);
    rp.compare_values(2f64.ln(), shannon::jensen_shannon(&p, &q).unwrap(), 1e-15);

    assert!(rp.cleanup(), "measure_orthogonal regression test failed");
}

// ========================================================================
// Test: Reference values on the fixture PDFs
// ========================================================================

#[test]
fn measure_reg_reference_values() {
    let mut rp = RegParams::new("measure_reference");

    let p = fixtures::HISTOGRAM_P;
    let q = fixtures::HISTOGRAM_Q;
    let delta = 1e-12;

    rp.compare_values(0.122474487139159, minkowski::euclidean(&p, &q).unwrap(), delta);
    rp.compare_values(0.3, minkowski::city_block(&p, &q).unwrap(), delta);
    rp.compare_values(0.05, minkowski::chebyshev(&p, &q).unwrap(), delta);
    rp.compare_values(0.15, l1::sorensen(&p, &q).unwrap(), delta);
    rp.compare_values(1.396825396825397, l1::canberra(&p, &q).unwrap(), delta);
    rp.compare_values(0.85, intersection::intersection(&p, &q).unwrap(), delta);
    rp.compare_values(0.85, intersection::czekanowski(&p, &q).unwrap(), delta);
    rp.compare_values(
        0.15,
        intersection::czekanowski_complement(&p, &q).unwrap(),
        delta,
    );
    rp.compare_values(0.951971638232989, inner_product::cosine(&p, &q).unwrap(), delta);
    rp.compare_values(0.982148993619719, fidelity::fidelity(&p, &q).unwrap(), delta);
    rp.compare_values(0.267215316778671, fidelity::hellinger(&p, &q).unwrap(), delta);
    rp.compare_values(
        0.141666666666667,
        chi_squared::pearson_chi_squared(&p, &q).unwrap(),
        delta,
    );
    rp.compare_values(0.070169991451142, shannon::kullback_leibler(&p, &q).unwrap(), delta);
    rp.compare_values(0.073727470443739, shannon::kullback_leibler(&q, &p).unwrap(), delta);
    rp.compare_values(0.017717865202061, shannon::jensen_shannon(&p, &q).unwrap(), delta);
    rp.compare_values(0.143897461894880, shannon::jeffreys(&p, &q).unwrap(), delta);

    // Jeffreys is the symmetrized Kullback-Leibler divergence
    let kl_sum =
        shannon::kullback_leibler(&p, &q).unwrap() + shannon::kullback_leibler(&q, &p).unwrap();
    rp.compare_values(kl_sum, shannon::jeffreys(&p, &q).unwrap(), delta);

    // Minkowski with p = 1 is the city block distance
    rp.compare_values(
        minkowski::city_block(&p, &q).unwrap(),
        minkowski::minkowski(&p, &q, 1).unwrap(),
        0.0,
    );
    rp.compare_values(
        minkowski::euclidean(&p, &q).unwrap(),
        minkowski::minkowski(&p, &q, 2).unwrap(),
        1e-3,
    );

    assert!(rp.cleanup(), "measure_reference regression test failed");
}

// ========================================================================
// Test: Identical inputs
// ========================================================================

fn identical_fixed_point(m: Measure) -> f64 {
    match m {
        Measure::Intersection
        | Measure::Czekanowski
        | Measure::Ruzicka
        | Measure::Cosine
        | Measure::KumarHassebrook
        | Measure::Jaccard
        | Measure::Dice
        | Measure::HarmonicMean
        | Measure::Fidelity
        | Measure::SquaredChordSimilarity => 1.0,
        Measure::Motyka | Measure::MotykaComplement => 0.5,
        Measure::InnerProduct => 0.25,
        Measure::KulczynskiS => MIN_VALUE,
        _ => 0.0,
    }
}

#[test]
fn measure_reg_identical_inputs() {
    let mut rp = RegParams::new("measure_identical");

    let u = fixtures::uniform_pdf(4);
    for m in Measure::ALL {
        let value = m.evaluate(&u, &u).unwrap();
        if !rp.compare_values(identical_fixed_point(m), value, 1e-12) {
            eprintln!("  measure: {m}");
        }
    }

    assert!(rp.cleanup(), "measure_identical regression test failed");
}

// ========================================================================
// Test: Catalog
// ========================================================================

#[test]
fn measure_reg_catalog() {
    let mut rp = RegParams::new("measure_catalog");

    let p = fixtures::HISTOGRAM_P;
    let q = fixtures::HISTOGRAM_Q;

    // Catalog dispatch agrees with the family functions
    rp.compare_values(
        l1::canberra(&p, &q).unwrap(),
        Measure::Canberra.evaluate(&p, &q).unwrap(),
        0.0,
    );
    rp.compare_values(
        minkowski::minkowski(&p, &q, 4).unwrap(),
        Measure::Minkowski(4).evaluate(&p, &q).unwrap(),
        0.0,
    );
    rp.compare_values(
        l1::gower(&p, &q, &[1.0; 8]).unwrap(),
        Measure::Gower.evaluate(&p, &q).unwrap(),
        0.0,
    );

    let families = [
        Family::Minkowski,
        Family::L1,
        Family::Intersection,
        Family::InnerProduct,
        Family::Fidelity,
        Family::SquaredL2,
        Family::Shannon,
        Family::Combination,
    ];
    for family in families {
        let members = Measure::ALL.iter().filter(|m| m.family() == family).count();
        rp.check(members > 0, family.name());
    }

    // Every measure is finite on PDFs with empty bins
    let sparse_p = [0.5, 0.0, 0.5, 0.0];
    let sparse_q = [0.0, 0.5, 0.5, 0.0];
    for m in Measure::ALL {
        let value = m.evaluate(&sparse_p, &sparse_q).unwrap();
        rp.check(value.is_finite(), m.name());
    }

    assert!(rp.cleanup(), "measure_catalog regression test failed");
}
